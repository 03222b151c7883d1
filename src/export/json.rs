//! JSON Export functionality
//!
//! Exports the metric catalog to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{OnboardingError, OnboardingResult};
use crate::metrics::{MetricKey, MetricType};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One metric key with its derived attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricKeyEntry {
    pub key: MetricKey,
    pub new_code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<MetricKey>,
}

impl From<MetricKey> for MetricKeyEntry {
    fn from(key: MetricKey) -> Self {
        Self {
            key,
            new_code: key.is_new_code(),
            overall: key.overall(),
        }
    }
}

/// Full catalog export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Every declared metric key
    pub metric_keys: Vec<MetricKeyEntry>,

    /// Every declared metric type
    pub metric_types: Vec<MetricType>,
}

impl CatalogExport {
    /// Snapshot the built-in catalog
    pub fn current() -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metric_keys: MetricKey::ALL
                .iter()
                .copied()
                .map(MetricKeyEntry::from)
                .collect(),
            metric_types: MetricType::ALL.to_vec(),
        }
    }

    /// Check an export read back from disk against the built-in catalog
    ///
    /// Unknown keys never get this far: they fail to deserialize.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.metric_keys {
            if !seen.insert(entry.key) {
                return Err(format!("Duplicate metric key: {}", entry.key));
            }
            if *entry != MetricKeyEntry::from(entry.key) {
                return Err(format!("Stale attributes for metric key: {}", entry.key));
            }
        }

        let missing = MetricKey::ALL.len() - seen.len();
        if missing > 0 {
            return Err(format!("Export is missing {} metric key(s)", missing));
        }

        let types: std::collections::HashSet<_> = self.metric_types.iter().collect();
        if types.len() != self.metric_types.len() || types.len() != MetricType::ALL.len() {
            return Err(format!(
                "Expected {} distinct metric types, got {}",
                MetricType::ALL.len(),
                self.metric_types.len()
            ));
        }

        Ok(())
    }
}

/// Export the catalog to JSON
pub fn export_catalog_json<W: Write>(writer: &mut W, pretty: bool) -> OnboardingResult<()> {
    let export = CatalogExport::current();

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(|e| OnboardingError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export and check it against the built-in catalog
pub fn import_from_json(json_str: &str) -> OnboardingResult<CatalogExport> {
    let export: CatalogExport = serde_json::from_str(json_str)?;
    export.validate().map_err(OnboardingError::Validation)?;
    Ok(export)
}
