//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library modules.

pub mod journal;
pub mod metrics;
pub mod tutorial;

pub use journal::handle_journal_command;
pub use metrics::{handle_metrics_command, ExportFormat, MetricsCommands};
pub use tutorial::{handle_tutorial_command, TutorialArgs};
