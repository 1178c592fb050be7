use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::format_scalar;

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value, decimals: u32) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_envelope(result, map, decimals);
            } else {
                print_object(map, decimals);
            }
        }
        Value::Array(arr) => print_rows(arr, decimals),
        _ => println!("{}", format_scalar(value, decimals)),
    }
}

fn print_envelope(result: &Value, envelope: &Map<String, Value>, decimals: u32) {
    match result {
        Value::Object(res_map) => print_object(res_map, decimals),
        other => print_table(other, decimals),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Two-column table; nested objects are flattened into `parent.child` rows.
fn print_object(map: &Map<String, Value>, decimals: u32) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    push_flattened(&mut builder, "", map, decimals);
    println!("{}", Table::from(builder));
}

fn push_flattened(builder: &mut Builder, prefix: &str, map: &Map<String, Value>, decimals: u32) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => push_flattened(builder, &name, inner, decimals),
            Value::Array(items) if items.iter().any(Value::is_object) => {
                builder.push_record([name, format!("[{} rows]", items.len())]);
            }
            _ => builder.push_record([name, format_scalar(val, decimals)]),
        }
    }
}

fn print_rows(arr: &[Value], decimals: u32) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_scalar(v, decimals))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_scalar(item, decimals));
        }
    }
}
