mod commands;
mod input;
mod output;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use closing_cost_core::assumptions::CostAssumptions;

use commands::analysis::{AnalyzeArgs, CompareTermsArgs};
use commands::mortgage::{ClosingCostsArgs, MonthlyPaymentArgs, PmiArgs};
use commands::schedule::ScheduleArgs;
use commands::state_tax::StateRatesArgs;

/// Mortgage payment, escrow and closing-cost calculations
#[derive(Parser)]
#[command(
    name = "closing-cost",
    version,
    about = "Mortgage payment, escrow and closing-cost calculations",
    long_about = "A CLI for home-purchase cost calculations with decimal precision. \
                  Computes monthly P&I with escrow, PMI, state transfer taxes and \
                  recording fees, cash to close, multi-year cost projections and \
                  full amortisation schedules."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Decimal places for table, csv and minimal output
    #[arg(long, default_value = "2", global = true)]
    decimals: u32,

    /// JSON or YAML file overriding default rates and fees
    #[arg(long, env = "CLOSING_COST_ASSUMPTIONS", global = true)]
    assumptions: Option<String>,

    /// Log filter used when RUST_LOG is unset (e.g. debug, closing_cost_core=trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Property tax, transfer tax and recording fees by state
    StateRates(StateRatesArgs),
    /// Monthly payment breakdown (P&I, PMI, taxes, insurance, HOA)
    MonthlyPayment(MonthlyPaymentArgs),
    /// Monthly private mortgage insurance
    Pmi(PmiArgs),
    /// Closing cost total and cash to close
    ClosingCosts(ClosingCostsArgs),
    /// Full purchase analysis with projection
    Analyze(AnalyzeArgs),
    /// Compare monthly payment and lifetime interest across loan terms
    CompareTerms(CompareTermsArgs),
    /// Month-by-month amortisation schedule
    Schedule(ScheduleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn load_assumptions(path: Option<&str>) -> Result<CostAssumptions, Box<dyn std::error::Error>> {
    let assumptions: CostAssumptions = match path {
        Some(p) => {
            tracing::debug!(path = p, "loading cost assumptions");
            input::file::read_config(p)?
        }
        None => CostAssumptions::default(),
    };
    assumptions.validate()?;
    Ok(assumptions)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(&cli.log_level) {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }

    let assumptions = match load_assumptions(cli.assumptions.as_deref()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::StateRates(args) => commands::state_tax::run_state_rates(args),
        Commands::MonthlyPayment(args) => {
            commands::mortgage::run_monthly_payment(args, &assumptions)
        }
        Commands::Pmi(args) => commands::mortgage::run_pmi(args, &assumptions),
        Commands::ClosingCosts(args) => commands::mortgage::run_closing_costs(args, &assumptions),
        Commands::Analyze(args) => commands::analysis::run_analyze(args, &assumptions),
        Commands::CompareTerms(args) => {
            commands::analysis::run_compare_terms(args, &assumptions)
        }
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Version => {
            println!("closing-cost {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value, cli.decimals);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
