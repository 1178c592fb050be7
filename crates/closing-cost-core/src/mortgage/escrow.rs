use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::CostAssumptions;
use crate::error::{ensure_fee, ensure_rate, ClosingCostError};
use crate::mortgage::loan::{LoanConfiguration, PMI_WAIVER_DOWN_PAYMENT_PERCENT};
use crate::state_tax::StateTaxRates;
use crate::types::{Money, Percent};
use crate::ClosingCostResult;

/// Monthly recurring costs of ownership.
///
/// The formulas in [`derive_recurring_costs`] only produce defaults. A caller
/// may replace any field and the engine uses the supplied value as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringCosts {
    pub property_tax_monthly: Money,
    pub homeowners_insurance_monthly: Money,
    pub mortgage_insurance_monthly: Money,
    pub hoa_fees_monthly: Money,
    pub utilities_monthly: Money,
    pub maintenance_monthly: Money,
}

impl RecurringCosts {
    pub fn validate(&self) -> ClosingCostResult<()> {
        ensure_fee("property_tax_monthly", self.property_tax_monthly)?;
        ensure_fee(
            "homeowners_insurance_monthly",
            self.homeowners_insurance_monthly,
        )?;
        ensure_fee("mortgage_insurance_monthly", self.mortgage_insurance_monthly)?;
        ensure_fee("hoa_fees_monthly", self.hoa_fees_monthly)?;
        ensure_fee("utilities_monthly", self.utilities_monthly)?;
        ensure_fee("maintenance_monthly", self.maintenance_monthly)?;
        Ok(())
    }

    /// Escrowed and non-escrowed costs together, excluding principal and interest.
    pub fn total_monthly(&self) -> Money {
        self.property_tax_monthly
            + self.homeowners_insurance_monthly
            + self.mortgage_insurance_monthly
            + self.hoa_fees_monthly
            + self.utilities_monthly
            + self.maintenance_monthly
    }
}

/// Monthly PMI: `loan * rate / 100 / 12` when the down payment is strictly
/// below 20%, otherwise zero.
pub fn derive_pmi(
    loan_amount: Money,
    down_payment_percent: Percent,
    pmi_rate_percent: Percent,
) -> ClosingCostResult<Money> {
    if loan_amount < Decimal::ZERO {
        return Err(ClosingCostError::InvalidLoanAmount {
            reason: format!("loan amount {loan_amount} is negative"),
        });
    }
    ensure_rate("pmi_rate_percent", pmi_rate_percent)?;

    if down_payment_percent < PMI_WAIVER_DOWN_PAYMENT_PERCENT {
        Ok(loan_amount * pmi_rate_percent / dec!(100) / dec!(12))
    } else {
        Ok(Decimal::ZERO)
    }
}

/// Default recurring costs for a loan in the given state.
pub fn derive_recurring_costs(
    config: &LoanConfiguration,
    state: &StateTaxRates,
    assumptions: &CostAssumptions,
) -> ClosingCostResult<RecurringCosts> {
    assumptions.validate()?;
    ensure_rate(
        "property_tax_rate_percent",
        state.property_tax_rate_percent,
    )?;
    config.ensure_down_payment_in_sync()?;
    let loan_amount = config.loan_amount()?;

    Ok(RecurringCosts {
        property_tax_monthly: state.property_tax_monthly(config.home_price),
        homeowners_insurance_monthly: annual_percent_monthly(
            config.home_price,
            assumptions.insurance_rate_percent,
        ),
        mortgage_insurance_monthly: derive_pmi(
            loan_amount,
            config.down_payment_percent,
            assumptions.pmi_rate_percent,
        )?,
        hoa_fees_monthly: assumptions.hoa_fees_monthly,
        utilities_monthly: assumptions.utilities_monthly,
        maintenance_monthly: annual_percent_monthly(
            config.home_price,
            assumptions.maintenance_rate_percent,
        ),
    })
}

fn annual_percent_monthly(base: Money, annual_percent: Percent) -> Money {
    base * annual_percent / dec!(100) / dec!(12)
}
