use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a piped request (`PurchaseInput`, a `{loan, recurring}` pair, a
/// schedule definition, ...) from stdin.
/// Returns None when stdin is a TTY or carries only whitespace, so the
/// command falls back to its flags.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_request(&buffer)
}

fn parse_request<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let request = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse request from stdin: {}", e))?;
    Ok(Some(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use closing_cost_core::mortgage::LoanConfiguration;
    use rust_decimal::Decimal;

    #[test]
    fn test_blank_input_falls_back_to_flags() {
        let parsed: Option<LoanConfiguration> = parse_request(" \n\t").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_piped_loan_is_typed() {
        let parsed: Option<LoanConfiguration> = parse_request(
            r#"{"home_price": 400000, "down_payment_amount": 80000,
                "down_payment_percent": 20, "interest_rate_annual_percent": "6.5",
                "loan_term_years": 30, "state_code": "CA"}"#,
        )
        .unwrap();
        let loan = parsed.unwrap();
        assert_eq!(loan.interest_rate_annual_percent, Decimal::new(65, 1));
        assert_eq!(loan.state_code, "CA");
    }

    #[test]
    fn test_malformed_request_names_stdin() {
        let err = parse_request::<LoanConfiguration>("{\"home_price\": }").unwrap_err();
        assert!(err.to_string().contains("stdin"), "{err}");
    }
}
