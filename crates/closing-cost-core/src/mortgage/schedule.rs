//! Month-by-month amortisation with optional extra principal.
//!
//! Row 1 reproduces the first-period split reported by
//! [`compute_monthly_payment`](crate::mortgage::payment::compute_monthly_payment);
//! later rows carry the shifting principal/interest mix the flat projection
//! leaves out.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_fee, ensure_rate, ClosingCostError};
use crate::time_value::{level_payment, monthly_rate, term_months};
use crate::types::{Money, Percent};
use crate::ClosingCostResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub loan_amount: Money,
    pub interest_rate_annual_percent: Percent,
    pub loan_term_years: u32,
    /// Added to every scheduled payment and applied wholly to principal.
    #[serde(default)]
    pub extra_monthly_principal: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub period: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Scheduled P&I plus extra principal actually paid this period.
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub extra_principal: Money,
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal: Money,
    pub interest: Money,
    pub ending_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub scheduled_payment: Money,
    pub rows: Vec<AmortizationRow>,
    pub years: Vec<YearSummary>,
    pub total_interest: Money,
    pub total_paid: Money,
    pub payoff_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_date: Option<NaiveDate>,
    /// Interest avoided relative to paying only the scheduled amount.
    pub interest_saved: Money,
}

pub fn build_schedule(input: &ScheduleInput) -> ClosingCostResult<AmortizationSchedule> {
    validate_schedule_input(input)?;

    let periods = term_months(input.loan_term_years)?;
    let rate = monthly_rate(input.interest_rate_annual_percent);
    let scheduled_payment = level_payment(input.loan_amount, rate, periods)?;

    tracing::debug!(
        loan_amount = %input.loan_amount,
        periods,
        extra = %input.extra_monthly_principal,
        "building amortisation schedule"
    );

    let rows = amortise(
        input.loan_amount,
        rate,
        periods,
        scheduled_payment,
        input.extra_monthly_principal,
        input.first_payment_date,
    )?;

    let total_interest: Money = rows.iter().map(|r| r.interest).sum();
    let total_paid: Money = rows.iter().map(|r| r.payment).sum();
    let payoff_months = rows.len() as u32;
    let payoff_date = rows.last().and_then(|r| r.payment_date);

    let interest_saved = if input.extra_monthly_principal.is_zero() {
        Decimal::ZERO
    } else {
        let baseline = amortise(
            input.loan_amount,
            rate,
            periods,
            scheduled_payment,
            Decimal::ZERO,
            None,
        )?;
        let baseline_interest: Money = baseline.iter().map(|r| r.interest).sum();
        baseline_interest - total_interest
    };

    Ok(AmortizationSchedule {
        scheduled_payment,
        years: summarise_years(&rows),
        rows,
        total_interest,
        total_paid,
        payoff_months,
        payoff_date,
        interest_saved,
    })
}

fn validate_schedule_input(input: &ScheduleInput) -> ClosingCostResult<()> {
    if input.loan_amount < Decimal::ZERO {
        return Err(ClosingCostError::InvalidLoanAmount {
            reason: format!("loan amount {} is negative", input.loan_amount),
        });
    }
    ensure_rate(
        "interest_rate_annual_percent",
        input.interest_rate_annual_percent,
    )?;
    ensure_fee("extra_monthly_principal", input.extra_monthly_principal)?;
    Ok(())
}

fn amortise(
    loan_amount: Money,
    rate: Decimal,
    periods: u32,
    scheduled_payment: Money,
    extra: Money,
    first_payment_date: Option<NaiveDate>,
) -> ClosingCostResult<Vec<AmortizationRow>> {
    let mut rows = Vec::with_capacity(periods as usize);
    let mut balance = loan_amount;

    for period in 1..=periods {
        if balance.is_zero() {
            break;
        }

        let interest = balance * rate;
        let mut principal = scheduled_payment - interest;
        let mut extra_principal = extra;

        // The final payment, or an extra payment that overshoots, settles the
        // exact remaining balance.
        if period == periods || principal >= balance {
            principal = balance;
            extra_principal = Decimal::ZERO;
            balance = Decimal::ZERO;
        } else if principal + extra_principal >= balance {
            extra_principal = balance - principal;
            balance = Decimal::ZERO;
        } else {
            balance -= principal + extra_principal;
        }

        rows.push(AmortizationRow {
            period,
            payment_date: payment_date(first_payment_date, period)?,
            payment: principal + interest + extra_principal,
            principal,
            interest,
            extra_principal,
            balance,
        });
    }

    Ok(rows)
}

fn payment_date(first: Option<NaiveDate>, period: u32) -> ClosingCostResult<Option<NaiveDate>> {
    let Some(first) = first else {
        return Ok(None);
    };
    first
        .checked_add_months(Months::new(period - 1))
        .map(Some)
        .ok_or_else(|| ClosingCostError::InvalidInput {
            field: "first_payment_date".into(),
            reason: format!("payment {period} falls outside the supported date range"),
        })
}

fn summarise_years(rows: &[AmortizationRow]) -> Vec<YearSummary> {
    rows.chunks(12)
        .enumerate()
        .map(|(idx, chunk)| YearSummary {
            year: idx as u32 + 1,
            principal: chunk.iter().map(|r| r.principal + r.extra_principal).sum(),
            interest: chunk.iter().map(|r| r.interest).sum(),
            ending_balance: chunk.last().map(|r| r.balance).unwrap_or_default(),
        })
        .collect()
}
