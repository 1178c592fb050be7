use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::mortgage::escrow::RecurringCosts;
use crate::mortgage::payment::MonthlyPaymentBreakdown;
use crate::types::Money;
use crate::ClosingCostResult;

const PROJECTION_SHORT_YEARS: u32 = 5;

/// Upfront and multi-year cost of ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub upfront_cash_to_close: Money,
    pub yearly_total: Money,
    pub five_year_total: Money,
    pub n_year_total: Money,
    pub years: u32,
}

/// Flat projection: the first month's payment repeated for every month.
///
/// No amortisation shift, no cost inflation and no PMI cancellation. The full
/// schedule in `mortgage::schedule` covers the amortising view.
pub fn compute_projection(
    monthly: &MonthlyPaymentBreakdown,
    recurring: &RecurringCosts,
    years: u32,
    upfront_cash_to_close: Money,
) -> ClosingCostResult<ProjectionResult> {
    recurring.validate()?;

    let months = Decimal::from(12);
    let ownership_monthly = monthly.taxes
        + monthly.insurance
        + monthly.pmi
        + monthly.hoa
        + recurring.utilities_monthly
        + recurring.maintenance_monthly;
    let yearly_total = monthly.principal_and_interest() * months + ownership_monthly * months;

    Ok(ProjectionResult {
        upfront_cash_to_close,
        yearly_total,
        five_year_total: yearly_total * Decimal::from(PROJECTION_SHORT_YEARS),
        n_year_total: yearly_total * Decimal::from(years),
        years,
    })
}
