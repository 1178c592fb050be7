use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use closing_cost_core::assumptions::CostAssumptions;
use closing_cost_core::mortgage::{
    analyze_purchase, compare_terms, derive_recurring_costs, LoanConfiguration, PurchaseInput,
    RecurringCosts,
};
use closing_cost_core::state_tax::lookup_state;

use super::loan_from_flags;
use crate::input;

/// Arguments for a full purchase analysis
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AnalyzeArgs {
    /// Path to JSON input file with a purchase definition (overrides flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price of the home
    #[arg(long)]
    pub home_price: Option<Decimal>,

    /// Down payment as a percent of home price (e.g. 20 for 20%)
    #[arg(long)]
    pub down_payment_percent: Option<Decimal>,

    /// Nominal annual interest rate in percent (e.g. 6.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term_years: u32,

    /// Two-letter state code
    #[arg(long)]
    pub state: Option<String>,

    /// Projection horizon in years (defaults to the loan term)
    #[arg(long)]
    pub years: Option<u32>,
}

/// Arguments for comparing loan terms
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CompareTermsArgs {
    /// Path to JSON input file: {"loan": {...}, "recurring": {...}}
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price of the home
    #[arg(long)]
    pub home_price: Option<Decimal>,

    /// Down payment as a percent of home price
    #[arg(long)]
    pub down_payment_percent: Option<Decimal>,

    /// Nominal annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Two-letter state code
    #[arg(long)]
    pub state: Option<String>,

    /// Terms to compare, in years
    #[arg(long, value_delimiter = ',', default_value = "10,15,20,30")]
    pub terms: Vec<u32>,
}

#[derive(Deserialize)]
struct CompareTermsRequest {
    loan: LoanConfiguration,
    #[serde(default)]
    recurring: Option<RecurringCosts>,
}

pub fn run_analyze(
    args: AnalyzeArgs,
    assumptions: &CostAssumptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let purchase: PurchaseInput = match input::read_request(args.input.as_deref())? {
        Some(p) => p,
        None => PurchaseInput {
            loan: loan_from_flags(
                args.home_price,
                args.down_payment_percent,
                args.rate,
                args.term_years,
                args.state.as_deref(),
            )?,
            projection_years: args.years,
            recurring_overrides: Default::default(),
            closing_cost_overrides: Default::default(),
        },
    };

    let result = analyze_purchase(&purchase, assumptions)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compare_terms(
    args: CompareTermsArgs,
    assumptions: &CostAssumptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request: CompareTermsRequest = match input::read_request(args.input.as_deref())? {
        Some(req) => req,
        None => CompareTermsRequest {
            loan: loan_from_flags(
                args.home_price,
                args.down_payment_percent,
                args.rate,
                // Placeholder; every compared term replaces it.
                30,
                args.state.as_deref(),
            )?,
            recurring: None,
        },
    };

    let recurring = match request.recurring {
        Some(rc) => rc,
        None => {
            let state = lookup_state(&request.loan.state_code)?;
            derive_recurring_costs(&request.loan, state, assumptions)?
        }
    };

    let rows = compare_terms(&request.loan, &recurring, &args.terms)?;
    Ok(serde_json::to_value(rows)?)
}
