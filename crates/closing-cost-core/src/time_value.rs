use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ClosingCostError;
use crate::types::{Money, Percent, Rate};
use crate::ClosingCostResult;

const MONTHS_PER_YEAR: u32 = 12;

/// Convert a nominal annual percentage (6.5 = 6.5%) into a monthly decimal rate.
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
}

/// Number of monthly payments in a term of whole years.
pub fn term_months(term_years: u32) -> ClosingCostResult<u32> {
    if term_years == 0 {
        return Err(ClosingCostError::InvalidTerm { years: term_years });
    }
    term_years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| ClosingCostError::InvalidInput {
            field: "loan_term_years".into(),
            reason: "Term is too long to express in months".into(),
        })
}

/// (1 + r)^n via iterative multiplication. Fails once the factor leaves the
/// `Decimal` range.
pub fn compound_factor(rate: Rate, periods: u32) -> ClosingCostResult<Decimal> {
    let one_plus_r = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor.checked_mul(one_plus_r).ok_or_else(rate_overflow)?;
    }
    Ok(factor)
}

fn rate_overflow() -> ClosingCostError {
    ClosingCostError::InvalidInput {
        field: "interest_rate_annual_percent".into(),
        reason: "Rate and term compound beyond the representable range".into(),
    }
}

/// Level monthly payment that retires `principal` over `periods` months:
/// P * r(1+r)^n / ((1+r)^n - 1), or straight-line P / n when r = 0.
pub fn level_payment(principal: Money, rate: Rate, periods: u32) -> ClosingCostResult<Money> {
    if periods == 0 {
        return Err(ClosingCostError::InvalidTerm { years: 0 });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let compound = compound_factor(rate, periods)?;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return Err(ClosingCostError::InvalidInput {
            field: "interest_rate_annual_percent".into(),
            reason: "Rate too small to amortise over the term".into(),
        });
    }

    let numerator = rate
        .checked_mul(compound)
        .and_then(|rc| principal.checked_mul(rc))
        .ok_or_else(rate_overflow)?;
    Ok(numerator / denominator)
}

/// Outstanding balance after `payments_made` level payments.
pub fn remaining_balance(
    principal: Money,
    rate: Rate,
    periods: u32,
    payments_made: u32,
) -> ClosingCostResult<Money> {
    if payments_made >= periods {
        return Ok(Decimal::ZERO);
    }

    let payment = level_payment(principal, rate, periods)?;
    let mut balance = principal;
    for _ in 0..payments_made {
        let interest = balance * rate;
        balance -= payment - interest;
    }

    if balance < Decimal::ZERO {
        balance = Decimal::ZERO;
    }
    Ok(balance)
}
