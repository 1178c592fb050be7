use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use closing_cost_core::assumptions::CostAssumptions;
use closing_cost_core::mortgage::{
    compute_cash_to_close, compute_closing_cost_total, compute_monthly_payment,
    derive_closing_costs, derive_pmi, derive_recurring_costs, ClosingCosts, LoanConfiguration,
    RecurringCosts,
};
use closing_cost_core::state_tax::lookup_state;

use super::loan_from_flags;
use crate::input;

/// Arguments for the monthly payment breakdown
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MonthlyPaymentArgs {
    /// Path to JSON input file: {"loan": {...}, "recurring": {...}}
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
}

/// Arguments for the PMI calculation
#[derive(Args)]
pub struct PmiArgs {
    /// Financed amount
    #[arg(long)]
    pub loan_amount: Decimal,

    /// Down payment as a percent of home price
    #[arg(long)]
    pub down_payment_percent: Decimal,

    /// Annual PMI premium in percent of the loan (defaults to the assumptions file)
    #[arg(long)]
    pub pmi_rate: Option<Decimal>,
}

/// Arguments for closing costs and cash to close
#[derive(Args)]
pub struct ClosingCostsArgs {
    /// Path to JSON input file: {"costs": {...}, "down_payment_amount": ...}
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price of the home (derives default fees)
    #[arg(long)]
    pub home_price: Option<Decimal>,

    /// Down payment as a percent of home price
    #[arg(long)]
    pub down_payment_percent: Option<Decimal>,

    /// Two-letter state code
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Deserialize)]
struct MonthlyPaymentRequest {
    loan: LoanConfiguration,
    /// Derived from the state table and assumptions when absent.
    #[serde(default)]
    recurring: Option<RecurringCosts>,
}

#[derive(Deserialize)]
struct ClosingCostsRequest {
    costs: ClosingCosts,
    down_payment_amount: Decimal,
}

pub fn run_monthly_payment(
    args: MonthlyPaymentArgs,
    assumptions: &CostAssumptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request: MonthlyPaymentRequest = match input::read_request(args.input.as_deref())? {
        Some(req) => req,
        None => MonthlyPaymentRequest {
            loan: loan_from_flags(
                args.home_price,
                args.down_payment_percent,
                args.rate,
                args.term_years,
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

    let breakdown = compute_monthly_payment(&request.loan, &recurring)?;
    Ok(serde_json::to_value(breakdown)?)
}

pub fn run_pmi(
    args: PmiArgs,
    assumptions: &CostAssumptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let rate = args.pmi_rate.unwrap_or(assumptions.pmi_rate_percent);
    let pmi = derive_pmi(args.loan_amount, args.down_payment_percent, rate)?;
    Ok(json!({
        "pmi_monthly": pmi,
        "pmi_rate_percent": rate,
        "pmi_required": !pmi.is_zero(),
    }))
}

pub fn run_closing_costs(
    args: ClosingCostsArgs,
    assumptions: &CostAssumptions,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request: ClosingCostsRequest = match input::read_request(args.input.as_deref())? {
        Some(req) => req,
        None => {
            let home_price = args
                .home_price
                .ok_or("--home-price is required (or provide --input)")?;
            let percent = args
                .down_payment_percent
                .ok_or("--down-payment-percent is required (or provide --input)")?;
            let state_code = args
                .state
                .ok_or("--state is required (or provide --input)")?
                .to_ascii_uppercase();
            // Rate and term do not enter closing costs.
            let loan = LoanConfiguration::new(home_price, percent, Decimal::ZERO, 30, state_code);
            let state = lookup_state(&loan.state_code)?;
            ClosingCostsRequest {
                costs: derive_closing_costs(&loan, state, assumptions)?,
                down_payment_amount: loan.down_payment_amount,
            }
        }
    };

    let total = compute_closing_cost_total(&request.costs)?;
    let cash = compute_cash_to_close(request.down_payment_amount, total);
    Ok(json!({
        "closing_costs": request.costs,
        "closing_cost_total": total,
        "down_payment_amount": request.down_payment_amount,
        "cash_to_close": cash,
    }))
}
