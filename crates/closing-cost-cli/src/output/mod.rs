pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
///
/// JSON keeps full decimal precision; the human-oriented formats round
/// decimal values to `decimals` places.
pub fn format_output(format: &OutputFormat, value: &Value, decimals: u32) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value, decimals),
        OutputFormat::Csv => csv_out::print_csv(value, decimals),
        OutputFormat::Minimal => minimal::print_minimal(value, decimals),
    }
}

/// Render a scalar for display. Decimals arrive as JSON strings, so any string
/// that parses as a decimal is rounded too.
pub(crate) fn format_scalar(value: &Value, decimals: u32) -> String {
    match value {
        Value::String(s) => match Decimal::from_str(s) {
            Ok(d) => d.round_dp(decimals).to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => match Decimal::from_str(&n.to_string()) {
            Ok(d) => d.round_dp(decimals).to_string(),
            Err(_) => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| format_scalar(v, decimals))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
