use serde::{Deserialize, Serialize};

use crate::error::ensure_rate;
use crate::mortgage::escrow::RecurringCosts;
use crate::mortgage::loan::LoanConfiguration;
use crate::time_value::{level_payment, monthly_rate, term_months};
use crate::types::Money;
use crate::ClosingCostResult;

/// One month's payment split into its components.
///
/// `principal` and `interest` are the first-period split of the level P&I
/// payment. `total` is always the exact sum of the six components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPaymentBreakdown {
    pub principal: Money,
    pub interest: Money,
    pub pmi: Money,
    pub taxes: Money,
    pub insurance: Money,
    pub hoa: Money,
    pub total: Money,
}

impl MonthlyPaymentBreakdown {
    pub fn principal_and_interest(&self) -> Money {
        self.principal + self.interest
    }
}

/// Monthly payment breakdown for `config`, with escrow items taken verbatim
/// from `recurring`.
pub fn compute_monthly_payment(
    config: &LoanConfiguration,
    recurring: &RecurringCosts,
) -> ClosingCostResult<MonthlyPaymentBreakdown> {
    let periods = term_months(config.loan_term_years)?;
    let loan_amount = config.loan_amount()?;
    ensure_rate(
        "interest_rate_annual_percent",
        config.interest_rate_annual_percent,
    )?;
    recurring.validate()?;

    let rate = monthly_rate(config.interest_rate_annual_percent);
    let payment = level_payment(loan_amount, rate, periods)?;

    let interest = loan_amount * rate;
    let principal = payment - interest;

    let pmi = recurring.mortgage_insurance_monthly;
    let taxes = recurring.property_tax_monthly;
    let insurance = recurring.homeowners_insurance_monthly;
    let hoa = recurring.hoa_fees_monthly;

    Ok(MonthlyPaymentBreakdown {
        principal,
        interest,
        pmi,
        taxes,
        insurance,
        hoa,
        total: principal + interest + pmi + taxes + insurance + hoa,
    })
}
