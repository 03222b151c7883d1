//! Metric catalog
//!
//! Static enumeration of the metric identifiers and metric value types used
//! across the application, with a total membership check:
//!
//! - `MetricKey`: closed set of backend metric identifiers
//! - `MetricType`: closed set of value interpretations
//! - `is_metric_key`: exact, case-sensitive membership test
//!
//! # Example
//!
//! ```rust
//! use onboarding::metrics::{is_metric_key, MetricKey};
//!
//! assert!(is_metric_key("bugs"));
//! assert!(!is_metric_key("BUGS"));
//! assert_eq!(MetricKey::NewBugs.overall(), Some(MetricKey::Bugs));
//! ```

mod key;
mod metric_type;

pub use key::{is_metric_key, MetricKey};
pub use metric_type::MetricType;
