//! Display formatting for terminal output
//!
//! Formats the metric catalog and wizard steps for terminal display.

pub mod metrics;
pub mod tutorial;

pub use metrics::{format_metric_key_list, format_metric_type_list};
pub use tutorial::{format_analysis_step, format_header, format_token_step, mask_token};
