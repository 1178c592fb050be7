//! End-to-end purchase analysis.
//!
//! Runs the recompute sequence in order: loan amount and PMI eligibility,
//! state-dependent defaults, caller overrides, monthly breakdown, closing costs
//! and cash to close, then the projection. Nothing is cached between calls.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::assumptions::CostAssumptions;
use crate::error::ClosingCostError;
use crate::mortgage::closing::{
    compute_cash_to_close, compute_closing_cost_total, derive_closing_costs, ClosingCosts,
};
use crate::mortgage::escrow::{derive_recurring_costs, RecurringCosts};
use crate::mortgage::loan::LoanConfiguration;
use crate::mortgage::payment::{compute_monthly_payment, MonthlyPaymentBreakdown};
use crate::mortgage::projection::{compute_projection, ProjectionResult};
use crate::state_tax::{lookup_state, StateTaxRates};
use crate::time_value::{monthly_rate, remaining_balance, term_months};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::ClosingCostResult;

const COMMON_TERMS: [u32; 4] = [10, 15, 20, 30];
const HIGH_LTV_WARNING: Decimal = dec!(0.95);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Advanced-mode replacements for derived recurring costs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecurringCostOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_tax_monthly: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeowners_insurance_monthly: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage_insurance_monthly: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoa_fees_monthly: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilities_monthly: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_monthly: Option<Money>,
}

/// Advanced-mode replacements for derived closing costs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClosingCostOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_origination: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appraisal_fee: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_report_fee: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_services: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government_recording_charges: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_taxes: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_inspection: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Money>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub loan: LoanConfiguration,
    /// Horizon for `n_year_total`; defaults to the loan term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_years: Option<u32>,
    #[serde(default)]
    pub recurring_overrides: RecurringCostOverrides,
    #[serde(default)]
    pub closing_cost_overrides: ClosingCostOverrides,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseAnalysis {
    pub loan_amount: Money,
    /// Loan-to-value as a decimal fraction.
    pub loan_to_value: Decimal,
    pub pmi_required: bool,
    pub state: StateTaxRates,
    pub recurring_costs: RecurringCosts,
    pub closing_costs: ClosingCosts,
    pub monthly_payment: MonthlyPaymentBreakdown,
    pub closing_cost_total: Money,
    pub cash_to_close: Money,
    pub projection: ProjectionResult,
    /// Scheduled balance still owed at the end of the projection horizon.
    pub loan_balance_after_projection: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermComparison {
    pub loan_term_years: u32,
    pub monthly_principal_and_interest: Money,
    pub monthly_total: Money,
    pub total_principal_and_interest: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Full purchase analysis for one loan configuration.
pub fn analyze_purchase(
    input: &PurchaseInput,
    assumptions: &CostAssumptions,
) -> ClosingCostResult<ComputationOutput<PurchaseAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // 1. Loan amount and PMI eligibility
    let config = &input.loan;
    config.validate()?;
    assumptions.validate()?;
    let loan_amount = config.loan_amount()?;
    let loan_to_value = config.loan_to_value()?;
    let pmi_required = config.requires_pmi();

    tracing::debug!(
        state = %config.state_code,
        %loan_amount,
        %loan_to_value,
        pmi_required,
        "analysing purchase"
    );

    // 2. State-dependent defaults, then overrides
    let state = lookup_state(&config.state_code)?;
    let recurring = apply_recurring_overrides(
        derive_recurring_costs(config, state, assumptions)?,
        &input.recurring_overrides,
        &mut warnings,
    );
    let closing_costs = apply_closing_overrides(
        derive_closing_costs(config, state, assumptions)?,
        &input.closing_cost_overrides,
        &mut warnings,
    );

    // 3. Monthly breakdown
    let monthly_payment = compute_monthly_payment(config, &recurring)?;

    // 4. Closing costs and cash to close
    let closing_cost_total = compute_closing_cost_total(&closing_costs)?;
    let cash_to_close = compute_cash_to_close(config.down_payment_amount, closing_cost_total);

    // 5. Projection
    let years = input.projection_years.unwrap_or(config.loan_term_years);
    let projection = compute_projection(&monthly_payment, &recurring, years, cash_to_close)?;
    let loan_balance_after_projection = remaining_balance(
        loan_amount,
        monthly_rate(config.interest_rate_annual_percent),
        term_months(config.loan_term_years)?,
        years.saturating_mul(12),
    )?;

    collect_warnings(config, loan_to_value, pmi_required, &mut warnings);

    let analysis = PurchaseAnalysis {
        loan_amount,
        loan_to_value,
        pmi_required,
        state: state.clone(),
        recurring_costs: recurring,
        closing_costs,
        monthly_payment,
        closing_cost_total,
        cash_to_close,
        projection,
        loan_balance_after_projection,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate amortisation with first-period P&I split; flat multi-year projection",
        input,
        warnings,
        elapsed,
        analysis,
    ))
}

/// Monthly P&I and lifetime interest for each candidate term.
pub fn compare_terms(
    config: &LoanConfiguration,
    recurring: &RecurringCosts,
    terms: &[u32],
) -> ClosingCostResult<Vec<TermComparison>> {
    if terms.is_empty() {
        return Err(ClosingCostError::InvalidInput {
            field: "terms".into(),
            reason: "At least one loan term is required".into(),
        });
    }

    tracing::debug!(?terms, "comparing loan terms");

    let loan_amount = config.loan_amount()?;
    terms
        .iter()
        .map(|&term| -> ClosingCostResult<TermComparison> {
            let candidate = LoanConfiguration {
                loan_term_years: term,
                ..config.clone()
            };
            let breakdown = compute_monthly_payment(&candidate, recurring)?;
            let periods = Decimal::from(term_months(term)?);
            let monthly_pi = breakdown.principal_and_interest();
            let total_pi = monthly_pi * periods;
            Ok(TermComparison {
                loan_term_years: term,
                monthly_principal_and_interest: monthly_pi,
                monthly_total: breakdown.total,
                total_principal_and_interest: total_pi,
                total_interest: total_pi - loan_amount,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn apply_recurring_overrides(
    mut costs: RecurringCosts,
    overrides: &RecurringCostOverrides,
    warnings: &mut Vec<String>,
) -> RecurringCosts {
    let slots: [(&str, &mut Money, Option<Money>); 6] = [
        (
            "property_tax_monthly",
            &mut costs.property_tax_monthly,
            overrides.property_tax_monthly,
        ),
        (
            "homeowners_insurance_monthly",
            &mut costs.homeowners_insurance_monthly,
            overrides.homeowners_insurance_monthly,
        ),
        (
            "mortgage_insurance_monthly",
            &mut costs.mortgage_insurance_monthly,
            overrides.mortgage_insurance_monthly,
        ),
        (
            "hoa_fees_monthly",
            &mut costs.hoa_fees_monthly,
            overrides.hoa_fees_monthly,
        ),
        (
            "utilities_monthly",
            &mut costs.utilities_monthly,
            overrides.utilities_monthly,
        ),
        (
            "maintenance_monthly",
            &mut costs.maintenance_monthly,
            overrides.maintenance_monthly,
        ),
    ];
    for (field, slot, value) in slots {
        apply_override(field, slot, value, warnings);
    }
    costs
}

fn apply_closing_overrides(
    mut costs: ClosingCosts,
    overrides: &ClosingCostOverrides,
    warnings: &mut Vec<String>,
) -> ClosingCosts {
    let slots: [(&str, &mut Money, Option<Money>); 8] = [
        (
            "loan_origination",
            &mut costs.loan_origination,
            overrides.loan_origination,
        ),
        (
            "appraisal_fee",
            &mut costs.appraisal_fee,
            overrides.appraisal_fee,
        ),
        (
            "credit_report_fee",
            &mut costs.credit_report_fee,
            overrides.credit_report_fee,
        ),
        (
            "title_services",
            &mut costs.title_services,
            overrides.title_services,
        ),
        (
            "government_recording_charges",
            &mut costs.government_recording_charges,
            overrides.government_recording_charges,
        ),
        (
            "transfer_taxes",
            &mut costs.transfer_taxes,
            overrides.transfer_taxes,
        ),
        (
            "home_inspection",
            &mut costs.home_inspection,
            overrides.home_inspection,
        ),
        ("other", &mut costs.other, overrides.other),
    ];
    for (field, slot, value) in slots {
        apply_override(field, slot, value, warnings);
    }
    costs
}

fn apply_override(
    field: &str,
    slot: &mut Money,
    value: Option<Money>,
    warnings: &mut Vec<String>,
) {
    if let Some(v) = value {
        warnings.push(format!(
            "{field} overridden to {v} (derived default was {slot})"
        ));
        *slot = v;
    }
}

fn collect_warnings(
    config: &LoanConfiguration,
    loan_to_value: Decimal,
    pmi_required: bool,
    warnings: &mut Vec<String>,
) {
    if pmi_required {
        warnings.push(format!(
            "Down payment of {}% is below 20%; PMI applies",
            config.down_payment_percent
        ));
    }
    if loan_to_value > HIGH_LTV_WARNING {
        warnings.push(format!(
            "LTV of {}% exceeds 95%; very high leverage",
            (loan_to_value * dec!(100)).round_dp(2)
        ));
    }
    if config.interest_rate_annual_percent.is_zero() {
        warnings.push("Zero interest rate; payment is straight-line principal".into());
    }
    if !COMMON_TERMS.contains(&config.loan_term_years) {
        warnings.push(format!(
            "Loan term of {} years is not a standard 10/15/20/30-year term",
            config.loan_term_years
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_input() -> PurchaseInput {
        PurchaseInput {
            loan: LoanConfiguration::new(dec!(400000), dec!(20), dec!(6.5), 30, "CA"),
            projection_years: None,
            recurring_overrides: RecurringCostOverrides::default(),
            closing_cost_overrides: ClosingCostOverrides::default(),
        }
    }

    fn run(input: &PurchaseInput) -> ComputationOutput<PurchaseAnalysis> {
        analyze_purchase(input, &CostAssumptions::default()).unwrap()
    }

    #[test]
    fn test_end_to_end_california() {
        let out = run(&sample_input());
        let a = &out.result;
        assert_eq!(a.loan_amount, dec!(320000));
        assert_eq!(a.loan_to_value, dec!(0.8));
        assert!(!a.pmi_required);
        assert_eq!(a.monthly_payment.pmi, Decimal::ZERO);
        // 4000 + 600 + 50 + 2000 + 150 + 440 + 500 + 0
        assert_eq!(a.closing_cost_total, dec!(7740));
        assert_eq!(a.cash_to_close, dec!(87740));
        assert_eq!(a.projection.upfront_cash_to_close, a.cash_to_close);
        assert_eq!(a.projection.years, 30);
        assert_eq!(a.loan_balance_after_projection, Decimal::ZERO);
    }

    #[test]
    fn test_analysis_serializes_with_state_and_decimal_strings() {
        let json = serde_json::to_value(run(&sample_input())).unwrap();
        let result = &json["result"];
        assert_eq!(result["state"]["code"], "CA");
        assert_eq!(result["pmi_required"], false);
        let total: Decimal = result["closing_cost_total"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(total, dec!(7740));
    }

    #[test]
    fn test_mismatched_down_payment_is_rejected_not_charged_pmi() {
        let mut input = sample_input();
        input.loan = input.loan.with_down_payment_percent(dec!(5));
        input.loan.down_payment_amount = dec!(200000);
        let err = analyze_purchase(&input, &CostAssumptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("down_payment_amount"), "{err}");
    }

    #[test]
    fn test_no_warnings_for_plain_purchase() {
        let out = run(&sample_input());
        assert!(out.warnings.is_empty(), "{:?}", out.warnings);
    }

    #[test]
    fn test_pmi_warning_and_charge_below_twenty_percent() {
        let mut input = sample_input();
        input.loan = input.loan.with_down_payment_percent(dec!(5));
        let out = run(&input);
        assert!(out.result.pmi_required);
        assert!(out.result.monthly_payment.pmi > Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.contains("PMI")));
    }

    #[test]
    fn test_high_ltv_warning() {
        let mut input = sample_input();
        input.loan = input.loan.with_down_payment_percent(dec!(3));
        let out = run(&input);
        assert!(out.warnings.iter().any(|w| w.contains("95%")));
    }

    #[test]
    fn test_overrides_are_used_verbatim() {
        let mut input = sample_input();
        input.recurring_overrides.property_tax_monthly = Some(dec!(999));
        input.closing_cost_overrides.transfer_taxes = Some(Decimal::ZERO);
        let out = run(&input);
        assert_eq!(out.result.recurring_costs.property_tax_monthly, dec!(999));
        assert_eq!(out.result.monthly_payment.taxes, dec!(999));
        assert_eq!(out.result.closing_costs.transfer_taxes, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 2);
    }

    #[test]
    fn test_negative_override_rejected() {
        let mut input = sample_input();
        input.closing_cost_overrides.other = Some(dec!(-50));
        let err = analyze_purchase(&input, &CostAssumptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFee);
    }

    #[test]
    fn test_unknown_state_rejected() {
        let mut input = sample_input();
        input.loan.state_code = "ZZ".into();
        let err = analyze_purchase(&input, &CostAssumptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownState);
    }

    #[test]
    fn test_custom_projection_horizon() {
        let mut input = sample_input();
        input.projection_years = Some(7);
        let out = run(&input);
        let p = &out.result.projection;
        assert_eq!(p.n_year_total, p.yearly_total * dec!(7));
        assert!(out.result.loan_balance_after_projection > Decimal::ZERO);
        assert!(out.result.loan_balance_after_projection < dec!(320000));
    }

    #[test]
    fn test_nonstandard_term_warning() {
        let mut input = sample_input();
        input.loan.loan_term_years = 25;
        let out = run(&input);
        assert!(out.warnings.iter().any(|w| w.contains("25 years")));
    }

    #[test]
    fn test_compare_terms_shorter_costs_less_interest() {
        let cfg = sample_input().loan;
        let rows = compare_terms(&cfg, &RecurringCosts::default(), &[15, 30]).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].monthly_principal_and_interest > rows[1].monthly_principal_and_interest);
        assert!(rows[0].total_interest < rows[1].total_interest);
    }

    #[test]
    fn test_compare_terms_validation() {
        let cfg = sample_input().loan;
        let err = compare_terms(&cfg, &RecurringCosts::default(), &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let err = compare_terms(&cfg, &RecurringCosts::default(), &[15, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTerm);
    }

    #[test]
    fn test_metadata_populated() {
        let out = run(&sample_input());
        assert!(!out.methodology.is_empty());
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }
}
