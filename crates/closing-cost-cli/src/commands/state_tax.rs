use clap::Args;
use serde_json::Value;

use closing_cost_core::state_tax::{all_states, lookup_state};

#[derive(Args)]
pub struct StateRatesArgs {
    /// Two-letter state code (e.g. CA, DC). Omit to list every state.
    #[arg(long)]
    pub state: Option<String>,
}

pub fn run_state_rates(args: StateRatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match args.state {
        Some(code) => {
            let rates = lookup_state(&code.to_ascii_uppercase())?;
            Ok(serde_json::to_value(rates)?)
        }
        None => Ok(serde_json::to_value(all_states())?),
    }
}
