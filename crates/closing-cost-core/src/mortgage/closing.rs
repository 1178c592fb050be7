use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::CostAssumptions;
use crate::error::{ensure_fee, ensure_rate};
use crate::mortgage::loan::LoanConfiguration;
use crate::state_tax::StateTaxRates;
use crate::types::Money;
use crate::ClosingCostResult;

/// One-time fees paid at purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosingCosts {
    pub loan_origination: Money,
    pub appraisal_fee: Money,
    pub credit_report_fee: Money,
    pub title_services: Money,
    pub government_recording_charges: Money,
    pub transfer_taxes: Money,
    pub home_inspection: Money,
    pub other: Money,
}

impl ClosingCosts {
    /// Named fee fields in display order.
    pub fn fees(&self) -> [(&'static str, Money); 8] {
        [
            ("loan_origination", self.loan_origination),
            ("appraisal_fee", self.appraisal_fee),
            ("credit_report_fee", self.credit_report_fee),
            ("title_services", self.title_services),
            (
                "government_recording_charges",
                self.government_recording_charges,
            ),
            ("transfer_taxes", self.transfer_taxes),
            ("home_inspection", self.home_inspection),
            ("other", self.other),
        ]
    }
}

/// Default closing costs for a purchase in the given state.
pub fn derive_closing_costs(
    config: &LoanConfiguration,
    state: &StateTaxRates,
    assumptions: &CostAssumptions,
) -> ClosingCostResult<ClosingCosts> {
    assumptions.validate()?;
    ensure_rate(
        "transfer_tax_rate_percent",
        state.transfer_tax_rate_percent,
    )?;
    ensure_fee("recording_fees", state.recording_fees)?;

    Ok(ClosingCosts {
        loan_origination: config.home_price * assumptions.loan_origination_percent / dec!(100),
        appraisal_fee: assumptions.appraisal_fee,
        credit_report_fee: assumptions.credit_report_fee,
        title_services: assumptions.title_services,
        government_recording_charges: state.recording_fees,
        transfer_taxes: state.transfer_tax(config.home_price),
        home_inspection: assumptions.home_inspection,
        other: assumptions.other_closing_costs,
    })
}

/// Sum of the eight fee fields. Any negative fee is rejected.
pub fn compute_closing_cost_total(costs: &ClosingCosts) -> ClosingCostResult<Money> {
    let mut total = Decimal::ZERO;
    for (field, amount) in costs.fees() {
        ensure_fee(field, amount)?;
        total += amount;
    }
    Ok(total)
}

/// Funds due at closing: down payment plus closing costs.
pub fn compute_cash_to_close(down_payment_amount: Money, closing_cost_total: Money) -> Money {
    down_payment_amount + closing_cost_total
}
