//! Table output formatting using the `tabled` crate

use super::{truncate, Alignment, Column, OutputConfig};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment as TabledAlignment, Modify, Width},
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Format rows as a table with the given columns
    pub fn format_with_columns<T: Serialize>(
        data: &[T],
        columns: &[Column],
        config: &OutputConfig,
    ) -> String {
        if data.is_empty() {
            return "(no results)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(columns.iter().map(|c| c.name.as_str()));

        for item in data {
            let json = serde_json::to_value(item).unwrap_or_default();
            let row: Vec<String> = columns
                .iter()
                .map(|col| {
                    let value = json.get(&col.key).cloned().unwrap_or_default();
                    Self::format_value(&value, col, config)
                })
                .collect();
            builder.push_record(row);
        }

        let mut table = builder.build();

        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        for (i, col) in columns.iter().enumerate() {
            let alignment = match col.align {
                Alignment::Left => TabledAlignment::left(),
                Alignment::Right => TabledAlignment::right(),
            };
            table.with(Modify::new(Columns::single(i)).with(alignment));
        }

        if config.should_truncate() {
            table.with(Width::wrap(config.effective_width()));
        }

        table.to_string()
    }

    /// Format a simple key-value table
    pub fn format_key_value(pairs: &[(&str, String)], config: &OutputConfig) -> String {
        let mut builder = Builder::default();

        for (key, value) in pairs {
            builder.push_record([*key, value.as_str()]);
        }

        let mut table = builder.build();

        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        table.with(Modify::new(Columns::first()).with(TabledAlignment::right()));

        if config.should_truncate() {
            table.with(Width::wrap(config.effective_width()));
        }

        table.to_string()
    }

    fn format_value(value: &serde_json::Value, col: &Column, config: &OutputConfig) -> String {
        let s = Self::value_to_string(value);

        match col.max_width {
            Some(max_width) if config.should_truncate() => truncate(&s, max_width),
            _ => s,
        }
    }

    /// Convert a JSON value to a display string
    fn value_to_string(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => "-".to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(arr) => arr
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" -> "),
            serde_json::Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[derive(Serialize)]
    struct Reach {
        vertex: String,
        cost: Option<i64>,
        path: Vec<String>,
    }

    fn reach() -> Vec<Reach> {
        vec![
            Reach {
                vertex: "A".to_string(),
                cost: Some(0),
                path: vec!["A".to_string()],
            },
            Reach {
                vertex: "C".to_string(),
                cost: Some(5),
                path: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            },
        ]
    }

    #[test]
    fn test_format_with_columns() {
        let columns = vec![
            Column::new("Vertex", "vertex"),
            Column::new("Cost", "cost").with_alignment(Alignment::Right),
            Column::new("Path", "path"),
        ];
        let config = OutputConfig::new(OutputFormat::Table).without_truncation();
        let output = TableOutput::format_with_columns(&reach(), &columns, &config);

        assert!(output.contains("Vertex"));
        assert!(output.contains("Cost"));
        assert!(output.contains("A -> B -> C"));
    }

    #[test]
    fn test_empty_data() {
        let columns = vec![Column::new("Vertex", "vertex")];
        let config = OutputConfig::new(OutputFormat::Table);

        let output = TableOutput::format_with_columns::<Reach>(&[], &columns, &config);
        assert_eq!(output, "(no results)");
    }

    #[test]
    fn test_truncated_column() {
        let columns = vec![Column::new("Path", "path").with_max_width(6)];
        let config = OutputConfig::new(OutputFormat::Table).with_width(200);

        let output = TableOutput::format_with_columns(&reach(), &columns, &config);
        assert!(output.contains("A -..."));
        assert!(!output.contains("A -> B -> C"));
    }

    #[test]
    fn test_key_value_table() {
        let pairs = vec![("From", "B".to_string()), ("Cost", "-1".to_string())];
        let config = OutputConfig::new(OutputFormat::Table);
        let output = TableOutput::format_key_value(&pairs, &config);

        assert!(output.contains("From"));
        assert!(output.contains("-1"));
    }

    #[test]
    fn test_null_renders_as_dash() {
        assert_eq!(TableOutput::value_to_string(&serde_json::Value::Null), "-");
    }
}
