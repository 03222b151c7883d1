//! Metric catalog display formatting
//!
//! Formats metric keys and types as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::metrics::{MetricKey, MetricType};

#[derive(Tabled)]
struct MetricKeyRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Scope")]
    scope: &'static str,
    #[tabled(rename = "Overall")]
    overall: &'static str,
}

#[derive(Tabled)]
struct MetricTypeRow {
    #[tabled(rename = "Type")]
    wire: &'static str,
    #[tabled(rename = "Description")]
    label: &'static str,
}

/// Format metric keys as a table
pub fn format_metric_key_list(keys: &[MetricKey]) -> String {
    if keys.is_empty() {
        return "No metrics found.".to_string();
    }

    let rows = keys.iter().map(|key| MetricKeyRow {
        key: key.as_str(),
        scope: if key.is_new_code() { "new code" } else { "overall" },
        overall: key.overall().map(|k| k.as_str()).unwrap_or("-"),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!("\n{} metric(s)", keys.len()));
    output
}

/// Format metric types as a table
pub fn format_metric_type_list(types: &[MetricType]) -> String {
    let rows = types.iter().map(|t| MetricTypeRow {
        wire: t.as_str(),
        label: t.label(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_metric_key_list(&[]), "No metrics found.");
    }

    #[test]
    fn test_format_key_list() {
        let output = format_metric_key_list(&[MetricKey::Bugs, MetricKey::NewBugs]);
        assert!(output.contains("Key"));
        assert!(output.contains("new_bugs"));
        assert!(output.contains("new code"));
        assert!(output.ends_with("2 metric(s)"));
    }

    #[test]
    fn test_format_type_list() {
        let output = format_metric_type_list(MetricType::ALL);
        assert!(output.contains("SHORT_WORK_DUR"));
        assert!(output.contains("Short work duration"));
    }
}
