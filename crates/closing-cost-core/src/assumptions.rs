//! Default rates and fees used to derive recurring and closing costs.
//!
//! Every field can be overridden from a partial config file; missing fields
//! fall back to [`CostAssumptions::default`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_fee, ensure_rate};
use crate::types::{Money, Percent};
use crate::ClosingCostResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostAssumptions {
    /// Annual homeowners insurance as a percent of home price.
    pub insurance_rate_percent: Percent,
    /// Annual PMI premium as a percent of the loan amount.
    pub pmi_rate_percent: Percent,
    /// Annual maintenance reserve as a percent of home price.
    pub maintenance_rate_percent: Percent,
    /// Lender origination charge as a percent of home price.
    pub loan_origination_percent: Percent,
    pub appraisal_fee: Money,
    pub credit_report_fee: Money,
    pub title_services: Money,
    pub home_inspection: Money,
    pub other_closing_costs: Money,
    pub utilities_monthly: Money,
    pub hoa_fees_monthly: Money,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            insurance_rate_percent: dec!(0.35),
            pmi_rate_percent: dec!(0.5),
            maintenance_rate_percent: dec!(1.0),
            loan_origination_percent: dec!(1.0),
            appraisal_fee: dec!(600),
            credit_report_fee: dec!(50),
            title_services: dec!(2000),
            home_inspection: dec!(500),
            other_closing_costs: Decimal::ZERO,
            utilities_monthly: dec!(250),
            hoa_fees_monthly: Decimal::ZERO,
        }
    }
}

impl CostAssumptions {
    pub fn validate(&self) -> ClosingCostResult<()> {
        ensure_rate("insurance_rate_percent", self.insurance_rate_percent)?;
        ensure_rate("pmi_rate_percent", self.pmi_rate_percent)?;
        ensure_rate("maintenance_rate_percent", self.maintenance_rate_percent)?;
        ensure_rate("loan_origination_percent", self.loan_origination_percent)?;
        ensure_fee("appraisal_fee", self.appraisal_fee)?;
        ensure_fee("credit_report_fee", self.credit_report_fee)?;
        ensure_fee("title_services", self.title_services)?;
        ensure_fee("home_inspection", self.home_inspection)?;
        ensure_fee("other_closing_costs", self.other_closing_costs)?;
        ensure_fee("utilities_monthly", self.utilities_monthly)?;
        ensure_fee("hoa_fees_monthly", self.hoa_fees_monthly)?;
        Ok(())
    }
}
