use serde_json::{Map, Value};
use std::io;

use super::format_scalar;

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value, decimals: u32) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => write_fields(&mut wtr, result, decimals),
            Some(Value::Array(rows)) => write_rows(&mut wtr, rows, decimals),
            _ => write_fields(&mut wtr, map, decimals),
        },
        Value::Array(arr) => write_rows(&mut wtr, arr, decimals),
        _ => {
            let _ = wtr.write_record([&format_scalar(value, decimals)]);
        }
    }

    let _ = wtr.flush();
}

/// Two-column CSV: field, value. Nested objects become `parent.child`.
fn write_fields(wtr: &mut StdoutWriter<'_>, map: &Map<String, Value>, decimals: u32) {
    let _ = wtr.write_record(["field", "value"]);
    write_flattened(wtr, "", map, decimals);
}

fn write_flattened(wtr: &mut StdoutWriter<'_>, prefix: &str, map: &Map<String, Value>, decimals: u32) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => write_flattened(wtr, &name, inner, decimals),
            _ => {
                let _ = wtr.write_record([name.as_str(), &format_scalar(val, decimals)]);
            }
        }
    }
}

fn write_rows(wtr: &mut StdoutWriter<'_>, arr: &[Value], decimals: u32) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&format_scalar(item, decimals)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| {
                    map.get(*h)
                        .map(|v| format_scalar(v, decimals))
                        .unwrap_or_default()
                })
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}
