use closing_cost_core::assumptions::CostAssumptions;
use closing_cost_core::mortgage::{
    analyze_purchase, compute_cash_to_close, compute_closing_cost_total, compute_monthly_payment,
    compute_projection, derive_closing_costs, derive_pmi, derive_recurring_costs, ClosingCosts,
    LoanConfiguration, PurchaseInput, RecurringCosts,
};
use closing_cost_core::state_tax::lookup_state;
use closing_cost_core::{ClosingCostError, ErrorKind};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const EPSILON: Decimal = dec!(0.000000001);

fn reference_loan() -> LoanConfiguration {
    // $400k home, 20% down, 6.5% 30-year fixed
    LoanConfiguration::new(dec!(400000), dec!(20), dec!(6.5), 30, "CO")
}

fn reference_recurring() -> RecurringCosts {
    let cfg = reference_loan();
    let state = lookup_state(&cfg.state_code).unwrap();
    derive_recurring_costs(&cfg, state, &CostAssumptions::default()).unwrap()
}

fn sample_fees() -> ClosingCosts {
    ClosingCosts {
        loan_origination: dec!(3200),
        appraisal_fee: dec!(550),
        credit_report_fee: dec!(35),
        title_services: dec!(1800),
        government_recording_charges: dec!(80),
        transfer_taxes: dec!(40),
        home_inspection: dec!(450),
        other: dec!(125.50),
    }
}

// ===========================================================================
// Amortization
// ===========================================================================

#[test]
fn test_reference_30_year_payment() {
    let out = compute_monthly_payment(&reference_loan(), &reference_recurring()).unwrap();
    let pi = out.principal + out.interest;
    assert!((pi - dec!(2022.62)).abs() < dec!(0.01), "P&I = {pi}");
}

#[test]
fn test_zero_rate_is_straight_line() {
    // Loan amount 120,000 over 10 years at 0%
    let cfg = LoanConfiguration::new(dec!(120000), Decimal::ZERO, Decimal::ZERO, 10, "CO");
    let out = compute_monthly_payment(&cfg, &RecurringCosts::default()).unwrap();
    assert_eq!(out.principal + out.interest, dec!(1000));
    assert_eq!(out.interest, Decimal::ZERO);
}

#[test]
fn test_breakdown_total_is_exact_sum() {
    let configs = [
        reference_loan(),
        reference_loan().with_down_payment_percent(dec!(3.5)),
        LoanConfiguration::new(dec!(875000), dec!(25), dec!(7.375), 15, "NJ"),
        LoanConfiguration::new(dec!(189999.99), dec!(10), dec!(5.99), 20, "OH"),
    ];
    for cfg in configs {
        let state = lookup_state(&cfg.state_code).unwrap();
        let rc = derive_recurring_costs(&cfg, state, &CostAssumptions::default()).unwrap();
        let m = compute_monthly_payment(&cfg, &rc).unwrap();
        let sum = m.principal + m.interest + m.pmi + m.taxes + m.insurance + m.hoa;
        assert!((m.total - sum).abs() <= EPSILON);
    }
}

// ===========================================================================
// PMI
// ===========================================================================

#[test]
fn test_pmi_threshold_is_strict() {
    let at_twenty = reference_loan();
    let loan = at_twenty.loan_amount().unwrap();
    assert_eq!(
        derive_pmi(loan, at_twenty.down_payment_percent, dec!(0.5)).unwrap(),
        Decimal::ZERO
    );

    let below = reference_loan().with_down_payment_percent(dec!(19.99));
    let loan = below.loan_amount().unwrap();
    let pmi = derive_pmi(loan, below.down_payment_percent, dec!(0.5)).unwrap();
    assert!(pmi > Decimal::ZERO);
    assert_eq!(pmi, loan * dec!(0.5) / dec!(100) / dec!(12));
}

// ===========================================================================
// Closing costs
// ===========================================================================

#[test]
fn test_closing_cost_total_is_arithmetic_sum() {
    let fees = sample_fees();
    let expected = dec!(3200) + dec!(550) + dec!(35) + dec!(1800) + dec!(80) + dec!(40)
        + dec!(450)
        + dec!(125.50);
    assert_eq!(compute_closing_cost_total(&fees).unwrap(), expected);
}

#[test]
fn test_each_fee_moves_total_by_delta() {
    let base = compute_closing_cost_total(&sample_fees()).unwrap();
    let delta = dec!(77.77);
    let edits: [fn(&mut ClosingCosts, Decimal); 8] = [
        |c, d| c.loan_origination += d,
        |c, d| c.appraisal_fee += d,
        |c, d| c.credit_report_fee += d,
        |c, d| c.title_services += d,
        |c, d| c.government_recording_charges += d,
        |c, d| c.transfer_taxes += d,
        |c, d| c.home_inspection += d,
        |c, d| c.other += d,
    ];
    for edit in edits {
        let mut fees = sample_fees();
        edit(&mut fees, delta);
        assert_eq!(compute_closing_cost_total(&fees).unwrap() - base, delta);
    }
}

#[test]
fn test_negative_fee_is_invalid_fee() {
    let mut fees = sample_fees();
    fees.appraisal_fee = dec!(-550);
    match compute_closing_cost_total(&fees) {
        Err(ClosingCostError::InvalidFee { field, value }) => {
            assert_eq!(field, "appraisal_fee");
            assert_eq!(value, dec!(-550));
        }
        other => panic!("expected InvalidFee, got {other:?}"),
    }
}

#[test]
fn test_cash_to_close_moves_with_down_payment() {
    let closing = compute_closing_cost_total(&sample_fees()).unwrap();
    let base = compute_cash_to_close(dec!(80000), closing);
    let bumped = compute_cash_to_close(dec!(80000) + dec!(12345.67), closing);
    assert_eq!(bumped - base, dec!(12345.67));
}

#[test]
fn test_derived_closing_costs_use_state_figures() {
    let cfg = LoanConfiguration::new(dec!(500000), dec!(20), dec!(6.5), 30, "NY");
    let ny = lookup_state("NY").unwrap();
    let costs = derive_closing_costs(&cfg, ny, &CostAssumptions::default()).unwrap();
    assert_eq!(costs.government_recording_charges, ny.recording_fees);
    assert_eq!(costs.transfer_taxes, dec!(2000));
}

// ===========================================================================
// Projection
// ===========================================================================

#[test]
fn test_projection_scaling_is_exact() {
    let rc = reference_recurring();
    let m = compute_monthly_payment(&reference_loan(), &rc).unwrap();
    for years in [1u32, 3, 5, 10, 30] {
        let p = compute_projection(&m, &rc, years, dec!(90000)).unwrap();
        assert_eq!(p.five_year_total, dec!(5) * p.yearly_total);
        assert_eq!(p.n_year_total, Decimal::from(years) * p.yearly_total);
    }
}

// ===========================================================================
// State table
// ===========================================================================

#[test]
fn test_unknown_state_fails_closed() {
    let err = lookup_state("ZZ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownState);
}

// ===========================================================================
// Idempotence
// ===========================================================================

#[test]
fn test_repeated_calls_are_identical() {
    let cfg = reference_loan().with_down_payment_percent(dec!(12));
    let rc = reference_recurring();

    let a = compute_monthly_payment(&cfg, &rc).unwrap();
    let b = compute_monthly_payment(&cfg, &rc).unwrap();
    assert_eq!(a, b);

    let pa = compute_projection(&a, &rc, 30, dec!(1)).unwrap();
    let pb = compute_projection(&b, &rc, 30, dec!(1)).unwrap();
    assert_eq!(pa, pb);

    let input = PurchaseInput {
        loan: cfg,
        projection_years: Some(10),
        recurring_overrides: Default::default(),
        closing_cost_overrides: Default::default(),
    };
    let x = analyze_purchase(&input, &CostAssumptions::default()).unwrap();
    let y = analyze_purchase(&input, &CostAssumptions::default()).unwrap();
    assert_eq!(x.result.monthly_payment, y.result.monthly_payment);
    assert_eq!(x.result.projection, y.result.projection);
    assert_eq!(x.warnings, y.warnings);
}

// ===========================================================================
// Error taxonomy
// ===========================================================================

#[test]
fn test_error_kinds_surface_from_engine() {
    let mut zero_term = reference_loan();
    zero_term.loan_term_years = 0;
    assert_eq!(
        compute_monthly_payment(&zero_term, &RecurringCosts::default())
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidTerm
    );

    let over_down = reference_loan().with_down_payment_percent(dec!(101));
    assert_eq!(
        compute_monthly_payment(&over_down, &RecurringCosts::default())
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidLoanAmount
    );

    assert_eq!(
        derive_pmi(dec!(1000), dec!(5), dec!(-1)).unwrap_err().kind(),
        ErrorKind::InvalidRate
    );
}
