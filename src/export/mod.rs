//! Export module for the metric catalog
//!
//! Provides catalog export in multiple formats:
//! - CSV: metric keys only (spreadsheet-compatible)
//! - JSON: machine-readable catalog with keys and types
//! - YAML: human-readable catalog with keys and types

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_metric_keys_csv;
pub use json::{export_catalog_json, CatalogExport, MetricKeyEntry, EXPORT_SCHEMA_VERSION};
pub use yaml::export_catalog_yaml;
