//! CSV output formatting for data export.

use super::{Column, OutputConfig};
use serde::Serialize;

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format data as CSV string
    ///
    /// For single objects, outputs a two-row CSV (header + values).
    /// For arrays, outputs headers followed by one row per item.
    pub fn format<T: Serialize + ?Sized>(data: &T, _config: &OutputConfig) -> String {
        match serde_json::to_value(data) {
            Ok(serde_json::Value::Array(arr)) => Self::format_array_value(&arr),
            Ok(serde_json::Value::Object(obj)) => Self::format_object_value(&obj),
            Ok(other) => Self::value_to_csv(&other),
            Err(_) => String::new(),
        }
    }

    /// Format rows as CSV with the given columns, in column order
    pub fn format_with_columns<T: Serialize>(data: &[T], columns: &[Column]) -> String {
        let headers: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        let mut output = headers.join(",");

        for item in data {
            let Ok(json) = serde_json::to_value(item) else {
                continue;
            };
            let row: Vec<String> = columns
                .iter()
                .map(|col| {
                    json.get(&col.key)
                        .map(Self::value_to_csv)
                        .unwrap_or_default()
                })
                .collect();
            output.push('\n');
            output.push_str(&row.join(","));
        }

        output
    }

    fn format_array_value(arr: &[serde_json::Value]) -> String {
        let Some(serde_json::Value::Object(first)) = arr.first() else {
            return arr
                .iter()
                .map(Self::value_to_csv)
                .collect::<Vec<_>>()
                .join("\n");
        };
        let headers: Vec<String> = first.keys().cloned().collect();

        let mut output = headers.join(",");
        for item in arr {
            if let serde_json::Value::Object(obj) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| obj.get(h).map(Self::value_to_csv).unwrap_or_default())
                    .collect();
                output.push('\n');
                output.push_str(&row.join(","));
            }
        }

        output
    }

    fn format_object_value(obj: &serde_json::Map<String, serde_json::Value>) -> String {
        let headers: Vec<&str> = obj.keys().map(|s| s.as_str()).collect();
        let values: Vec<String> = obj.values().map(Self::value_to_csv).collect();

        format!("{}\n{}", headers.join(","), values.join(","))
    }

    /// Convert a JSON value to a CSV cell
    ///
    /// Arrays of scalars are joined with spaces so a path stays in one cell.
    fn value_to_csv(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => Self::escape_value(s),
            serde_json::Value::Array(arr) => {
                let joined = arr
                    .iter()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                Self::escape_value(&joined)
            }
            serde_json::Value::Object(obj) => {
                Self::escape_value(&format!("{{{} fields}}", obj.len()))
            }
        }
    }

    /// Escape a string value for CSV
    ///
    /// Wraps in quotes if the value contains comma, newline, or quote.
    /// Doubles any existing quotes.
    fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('\n') || s.contains('\r') || s.contains('"') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
