use serde_json::Value;

use super::format_scalar;

/// Headline figure per command, in priority order.
const PRIORITY_KEYS: [&str; 7] = [
    "total",
    "pmi_monthly",
    "cash_to_close",
    "closing_cost_total",
    "scheduled_payment",
    "monthly_principal_and_interest",
    "property_tax_rate_percent",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value, decimals: u32) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_scalar(val, decimals));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_scalar(val, decimals));
            return;
        }
    }

    if let Value::Array(rows) = result_obj {
        for row in rows {
            println!("{}", headline(row, decimals));
        }
        return;
    }

    println!("{}", format_scalar(result_obj, decimals));
}

fn headline(row: &Value, decimals: u32) -> String {
    match row {
        Value::Object(map) => PRIORITY_KEYS
            .iter()
            .find_map(|k| map.get(*k))
            .map(|v| format_scalar(v, decimals))
            .unwrap_or_else(|| format_scalar(row, decimals)),
        other => format_scalar(other, decimals),
    }
}
