//! CSV Export functionality
//!
//! Exports metric keys to CSV format.

use serde::Serialize;
use std::io::Write;

use crate::error::{OnboardingError, OnboardingResult};
use crate::metrics::MetricKey;

#[derive(Serialize)]
struct MetricKeyRow {
    key: &'static str,
    new_code: bool,
    overall: &'static str,
}

/// Export all metric keys to CSV
pub fn export_metric_keys_csv<W: Write>(writer: &mut W) -> OnboardingResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for key in MetricKey::ALL {
        let row = MetricKeyRow {
            key: key.as_str(),
            new_code: key.is_new_code(),
            overall: key.overall().map(|k| k.as_str()).unwrap_or(""),
        };
        csv_writer
            .serialize(row)
            .map_err(|e| OnboardingError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| OnboardingError::Export(e.to_string()))?;

    Ok(())
}
