//! YAML Export functionality
//!
//! Exports the metric catalog to YAML format for human reading.

use std::io::Write;

use crate::error::{OnboardingError, OnboardingResult};
use crate::export::json::CatalogExport;

/// Export the catalog to YAML format
pub fn export_catalog_yaml<W: Write>(writer: &mut W) -> OnboardingResult<()> {
    let export = CatalogExport::current();

    writeln!(writer, "# Metric Catalog Export")
        .map_err(|e| OnboardingError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| OnboardingError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| OnboardingError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| OnboardingError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Metric keys are backend identifiers and must be used verbatim."
    )
    .map_err(|e| OnboardingError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| OnboardingError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

/// Read back a YAML export and check it against the built-in catalog
pub fn import_from_yaml(yaml_str: &str) -> OnboardingResult<CatalogExport> {
    let export: CatalogExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(OnboardingError::Validation)?;
    Ok(export)
}
