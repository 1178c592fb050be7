use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_rate, ClosingCostError};
use crate::types::{Money, Percent};
use crate::ClosingCostResult;

/// Down payment at or above this percent waives PMI.
pub const PMI_WAIVER_DOWN_PAYMENT_PERCENT: Percent = dec!(20);

/// Largest gap, in currency units, allowed between the stated down payment
/// amount and the one implied by the percent.
const DOWN_PAYMENT_SYNC_TOLERANCE: Money = dec!(0.01);

/// Immutable loan inputs shared by every engine operation.
///
/// `down_payment_amount` and `down_payment_percent` describe the same quantity;
/// the `with_*` constructors keep them in step. The percent is authoritative
/// for PMI eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanConfiguration {
    pub home_price: Money,
    pub down_payment_amount: Money,
    pub down_payment_percent: Percent,
    /// Nominal annual rate, e.g. 6.5 for 6.5%.
    pub interest_rate_annual_percent: Percent,
    pub loan_term_years: u32,
    /// Two-letter key into the state tax table.
    pub state_code: String,
}

impl LoanConfiguration {
    pub fn new(
        home_price: Money,
        down_payment_percent: Percent,
        interest_rate_annual_percent: Percent,
        loan_term_years: u32,
        state_code: impl Into<String>,
    ) -> Self {
        Self {
            home_price,
            down_payment_amount: home_price * down_payment_percent / dec!(100),
            down_payment_percent,
            interest_rate_annual_percent,
            loan_term_years,
            state_code: state_code.into(),
        }
    }

    /// Replace the percent and re-derive the amount.
    pub fn with_down_payment_percent(&self, percent: Percent) -> Self {
        Self {
            down_payment_amount: self.home_price * percent / dec!(100),
            down_payment_percent: percent,
            ..self.clone()
        }
    }

    /// Replace the amount and re-derive the percent.
    pub fn with_down_payment_amount(&self, amount: Money) -> ClosingCostResult<Self> {
        if self.home_price <= Decimal::ZERO {
            return Err(ClosingCostError::InvalidInput {
                field: "home_price".into(),
                reason: "Home price must be positive to derive a down payment percent".into(),
            });
        }
        Ok(Self {
            down_payment_amount: amount,
            down_payment_percent: amount / self.home_price * dec!(100),
            ..self.clone()
        })
    }

    /// Replace the home price, keeping the percent and re-deriving the amount.
    pub fn with_home_price(&self, home_price: Money) -> Self {
        Self {
            home_price,
            down_payment_amount: home_price * self.down_payment_percent / dec!(100),
            ..self.clone()
        }
    }

    /// Financed amount: home price less down payment.
    pub fn loan_amount(&self) -> ClosingCostResult<Money> {
        let loan = self.home_price - self.down_payment_amount;
        if loan < Decimal::ZERO {
            return Err(ClosingCostError::InvalidLoanAmount {
                reason: format!(
                    "down payment {} exceeds home price {}",
                    self.down_payment_amount, self.home_price
                ),
            });
        }
        Ok(loan)
    }

    /// Loan-to-value as a decimal fraction (0.8 = 80%).
    pub fn loan_to_value(&self) -> ClosingCostResult<Decimal> {
        if self.home_price <= Decimal::ZERO {
            return Err(ClosingCostError::InvalidInput {
                field: "home_price".into(),
                reason: "Home price must be positive".into(),
            });
        }
        Ok(self.loan_amount()? / self.home_price)
    }

    /// The amount must match `home_price * percent / 100` to the cent. The
    /// percent is authoritative, so a stale amount is rejected rather than
    /// silently reconciled.
    pub fn ensure_down_payment_in_sync(&self) -> ClosingCostResult<()> {
        let implied = self.home_price * self.down_payment_percent / dec!(100);
        if (self.down_payment_amount - implied).abs() > DOWN_PAYMENT_SYNC_TOLERANCE {
            return Err(ClosingCostError::InvalidInput {
                field: "down_payment_amount".into(),
                reason: format!(
                    "down payment {} does not match {}% of home price {} (expected {})",
                    self.down_payment_amount,
                    self.down_payment_percent,
                    self.home_price,
                    implied.round_dp(2)
                ),
            });
        }
        Ok(())
    }

    /// Strictly below the 20% threshold; exactly 20% down needs no PMI.
    pub fn requires_pmi(&self) -> bool {
        self.down_payment_percent < PMI_WAIVER_DOWN_PAYMENT_PERCENT
    }

    /// Full precondition check. The engine operations check only what they use.
    pub fn validate(&self) -> ClosingCostResult<()> {
        if self.home_price <= Decimal::ZERO {
            return Err(ClosingCostError::InvalidInput {
                field: "home_price".into(),
                reason: "Home price must be positive".into(),
            });
        }
        if self.down_payment_percent < Decimal::ZERO || self.down_payment_percent > dec!(100) {
            return Err(ClosingCostError::InvalidInput {
                field: "down_payment_percent".into(),
                reason: "Down payment percent must be between 0 and 100".into(),
            });
        }
        if self.down_payment_amount < Decimal::ZERO {
            return Err(ClosingCostError::InvalidInput {
                field: "down_payment_amount".into(),
                reason: "Down payment cannot be negative".into(),
            });
        }
        self.ensure_down_payment_in_sync()?;
        ensure_rate(
            "interest_rate_annual_percent",
            self.interest_rate_annual_percent,
        )?;
        if self.loan_term_years == 0 {
            return Err(ClosingCostError::InvalidTerm {
                years: self.loan_term_years,
            });
        }
        self.loan_amount()?;
        Ok(())
    }
}
