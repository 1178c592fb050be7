//! Integration tests for the `closing-cost` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("closing-cost").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("CLOSING_COST_ASSUMPTIONS");
    cmd
}

#[test]
fn test_help_lists_commands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("monthly-payment"))
        .stdout(predicate::str::contains("state-rates"));
}

#[test]
fn test_version() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("closing-cost "));
}

#[test]
fn test_state_rates_lowercase_flag_is_accepted() {
    cli()
        .args(["state-rates", "--state", "nv", "--output", "minimal"])
        .assert()
        .success()
        .stdout("0.55\n");
}

#[test]
fn test_unknown_state_fails() {
    cli()
        .args(["state-rates", "--state", "ZZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown state code: ZZ"));
}

#[test]
fn test_monthly_payment_from_flags() {
    cli()
        .args([
            "monthly-payment",
            "--home-price",
            "400000",
            "--down-payment-percent",
            "20",
            "--rate",
            "6.5",
            "--state",
            "CA",
            "--output",
            "minimal",
        ])
        .assert()
        .success()
        .stdout("2389.28\n");
}

#[test]
fn test_monthly_payment_missing_flag() {
    cli()
        .args(["monthly-payment", "--home-price", "400000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--down-payment-percent is required"));
}

#[test]
fn test_pmi_threshold() {
    cli()
        .args([
            "pmi",
            "--loan-amount",
            "320000",
            "--down-payment-percent",
            "19.99",
            "--pmi-rate",
            "0.5",
            "--output",
            "minimal",
        ])
        .assert()
        .success()
        .stdout("133.33\n");

    cli()
        .args([
            "pmi",
            "--loan-amount",
            "320000",
            "--down-payment-percent",
            "20",
            "--output",
            "minimal",
        ])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_closing_costs_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("closing.json");
    fs::write(
        &path,
        r#"{
            "costs": {
                "loan_origination": 4000,
                "appraisal_fee": 600,
                "credit_report_fee": 50,
                "title_services": 2000,
                "government_recording_charges": 150,
                "transfer_taxes": 440,
                "home_inspection": 500,
                "other": 260
            },
            "down_payment_amount": 80000
        }"#,
    )
    .unwrap();

    cli()
        .args(["closing-costs", "--input"])
        .arg(&path)
        .args(["--output", "minimal"])
        .assert()
        .success()
        .stdout("88000\n");
}

#[test]
fn test_negative_fee_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("closing.json");
    fs::write(
        &path,
        r#"{"costs": {"loan_origination": 1, "appraisal_fee": -600, "credit_report_fee": 0,
            "title_services": 0, "government_recording_charges": 0, "transfer_taxes": 0,
            "home_inspection": 0, "other": 0}, "down_payment_amount": 0}"#,
    )
    .unwrap();

    cli()
        .args(["closing-costs", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("appraisal_fee"));
}

#[test]
fn test_analyze_with_yaml_assumptions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("assumptions.yaml");
    fs::write(&path, "title_services: 0\nappraisal_fee: 0\n").unwrap();

    // CA at 400k with defaults: 7740 closing costs; zeroing title and appraisal leaves 5140.
    cli()
        .args([
            "analyze",
            "--home-price",
            "400000",
            "--down-payment-percent",
            "20",
            "--rate",
            "6.5",
            "--state",
            "CA",
            "--assumptions",
        ])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"closing_cost_total\": \"5140"))
        .stdout(predicate::str::contains("\"cash_to_close\""));
}

#[test]
fn test_analyze_rejects_down_payment_above_price() {
    cli()
        .args([
            "analyze",
            "--home-price",
            "400000",
            "--down-payment-percent",
            "120",
            "--rate",
            "6.5",
            "--state",
            "CA",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("down_payment_percent"));
}

#[test]
fn test_analyze_rejects_amount_that_disagrees_with_percent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("purchase.json");
    fs::write(
        &path,
        r#"{"loan": {
            "home_price": 400000,
            "down_payment_amount": 200000,
            "down_payment_percent": 5,
            "interest_rate_annual_percent": 6.5,
            "loan_term_years": 30,
            "state_code": "CA"
        }}"#,
    )
    .unwrap();

    cli()
        .args(["analyze", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("down_payment_amount"));
}

#[test]
fn test_monthly_payment_overflow_is_an_error_not_a_panic() {
    cli()
        .args([
            "monthly-payment",
            "--home-price",
            "400000",
            "--down-payment-percent",
            "20",
            "--rate",
            "300",
            "--state",
            "CA",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interest_rate_annual_percent"));
}

#[test]
fn test_compare_terms_csv() {
    cli()
        .args([
            "compare-terms",
            "--home-price",
            "400000",
            "--down-payment-percent",
            "20",
            "--rate",
            "6.5",
            "--state",
            "TX",
            "--terms",
            "15,30",
            "--output",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("loan_term_years"))
        .stdout(predicate::str::contains("total_interest"));
}

#[test]
fn test_schedule_yearly_view() {
    cli()
        .args([
            "schedule",
            "--loan-amount",
            "120000",
            "--rate",
            "0",
            "--term-years",
            "10",
            "--view",
            "years",
            "--output",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ending_balance"))
        .stdout(predicate::str::contains("12000"));
}

#[test]
fn test_invalid_assumptions_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("assumptions.json");
    fs::write(&path, r#"{"pmi_rate_percent": -1}"#).unwrap();

    cli()
        .args(["state-rates", "--state", "CA", "--assumptions"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("pmi_rate_percent"));
}
