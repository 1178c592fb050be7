use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use closing_cost_core::mortgage::schedule::{build_schedule, ScheduleInput};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScheduleView {
    /// Totals, yearly summaries and every monthly row
    Full,
    /// Monthly rows only
    Rows,
    /// Yearly summaries only
    Years,
}

/// Arguments for the amortisation schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to JSON input file with schedule parameters (overrides flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Financed amount
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Nominal annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term_years: u32,

    /// Extra principal paid every month
    #[arg(long, default_value = "0")]
    pub extra_principal: Decimal,

    /// Date of the first payment (YYYY-MM-DD)
    #[arg(long)]
    pub first_payment_date: Option<NaiveDate>,

    /// Which part of the schedule to print
    #[arg(long, value_enum, default_value = "full")]
    pub view: ScheduleView,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = match input::read_request(args.input.as_deref())? {
        Some(req) => req,
        None => ScheduleInput {
            loan_amount: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            interest_rate_annual_percent: args
                .rate
                .ok_or("--rate is required (or provide --input)")?,
            loan_term_years: args.term_years,
            extra_monthly_principal: args.extra_principal,
            first_payment_date: args.first_payment_date,
        },
    };

    let schedule = build_schedule(&schedule_input)?;
    let value = match args.view {
        ScheduleView::Full => serde_json::to_value(schedule)?,
        ScheduleView::Rows => serde_json::to_value(schedule.rows)?,
        ScheduleView::Years => serde_json::to_value(schedule.years)?,
    };
    Ok(value)
}
