//! Metric catalog CLI commands
//!
//! Implements listing, checking, exporting, and verifying the metric catalog.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::display::metrics::{format_metric_key_list, format_metric_type_list};
use crate::error::{OnboardingError, OnboardingResult};
use crate::export::{csv, json, yaml};
use crate::metrics::{is_metric_key, MetricKey, MetricType};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (metric keys only)
    Csv,
    /// JSON format (keys and types)
    Json,
    /// YAML format (keys and types, human-readable)
    Yaml,
}

/// Metric subcommands
#[derive(Subcommand, Debug)]
pub enum MetricsCommands {
    /// List metric keys
    List {
        /// Only show metrics computed on new code
        #[arg(long)]
        new_code: bool,
    },
    /// List metric value types
    Types,
    /// Check whether strings are known metric keys
    Check {
        /// Candidate keys (exact, case-sensitive)
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Export the catalog to a file ("-" for stdout)
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Verify a JSON or YAML export against the built-in catalog
    Verify {
        /// Export file (".yaml"/".yml" is read as YAML, anything else as JSON)
        file: PathBuf,
    },
}

/// Handle a metrics command
pub fn handle_metrics_command(cmd: MetricsCommands) -> OnboardingResult<()> {
    match cmd {
        MetricsCommands::List { new_code } => {
            let keys: Vec<MetricKey> = MetricKey::ALL
                .iter()
                .copied()
                .filter(|k| !new_code || k.is_new_code())
                .collect();
            println!("{}", format_metric_key_list(&keys));
            Ok(())
        }
        MetricsCommands::Types => {
            println!("{}", format_metric_type_list(MetricType::ALL));
            Ok(())
        }
        MetricsCommands::Check { keys } => handle_check(&keys),
        MetricsCommands::Export {
            output,
            format,
            pretty,
        } => handle_export(output, format, pretty),
        MetricsCommands::Verify { file } => handle_verify(&file),
    }
}

fn handle_check(keys: &[String]) -> OnboardingResult<()> {
    let mut unknown = 0;

    for key in keys {
        if is_metric_key(key) {
            println!("{}: known", key);
        } else {
            println!("{}: unknown", key);
            unknown += 1;
        }
    }

    if unknown > 0 {
        return Err(OnboardingError::Validation(format!(
            "{} of {} key(s) are not metric keys",
            unknown,
            keys.len()
        )));
    }

    Ok(())
}

fn handle_export(output: PathBuf, format: ExportFormat, pretty: bool) -> OnboardingResult<()> {
    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        return write_export(&mut writer, format, pretty);
    }

    let file = File::create(&output).map_err(|e| {
        OnboardingError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_export(&mut writer, format, pretty)?;
    writer
        .flush()
        .map_err(|e| OnboardingError::Export(e.to_string()))?;

    println!(
        "Exported {} metric keys to {}",
        MetricKey::ALL.len(),
        output.display()
    );
    Ok(())
}

fn write_export<W: Write>(
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> OnboardingResult<()> {
    match format {
        ExportFormat::Csv => csv::export_metric_keys_csv(writer),
        ExportFormat::Json => json::export_catalog_json(writer, pretty),
        ExportFormat::Yaml => yaml::export_catalog_yaml(writer),
    }
}

fn handle_verify(file: &Path) -> OnboardingResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        OnboardingError::Io(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let is_yaml = matches!(
        file.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let export = if is_yaml {
        yaml::import_from_yaml(&contents)?
    } else {
        json::import_from_json(&contents)?
    };

    println!(
        "{}: {} metric keys and {} metric types match this catalog (schema {}, written by {})",
        file.display(),
        export.metric_keys.len(),
        export.metric_types.len(),
        export.schema_version,
        export.app_version
    );
    Ok(())
}
