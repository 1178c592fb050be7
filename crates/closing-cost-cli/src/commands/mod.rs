pub mod analysis;
pub mod mortgage;
pub mod schedule;
pub mod state_tax;

use rust_decimal::Decimal;

use closing_cost_core::mortgage::LoanConfiguration;

/// Build a loan configuration from individual flags, naming the first missing one.
pub(crate) fn loan_from_flags(
    home_price: Option<Decimal>,
    down_payment_percent: Option<Decimal>,
    interest_rate: Option<Decimal>,
    term_years: u32,
    state: Option<&str>,
) -> Result<LoanConfiguration, Box<dyn std::error::Error>> {
    let home_price = home_price.ok_or("--home-price is required (or provide --input)")?;
    let down_payment_percent =
        down_payment_percent.ok_or("--down-payment-percent is required (or provide --input)")?;
    let interest_rate = interest_rate.ok_or("--rate is required (or provide --input)")?;
    let state = state.ok_or("--state is required (or provide --input)")?;

    Ok(LoanConfiguration::new(
        home_price,
        down_payment_percent,
        interest_rate,
        term_years,
        state.to_ascii_uppercase(),
    ))
}
