//! Metric value types
//!
//! Describes how a metric value should be interpreted when displayed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OnboardingError;

/// How a metric value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricType {
    /// Letter rating (A to E)
    #[serde(rename = "RATING")]
    Rating,
    /// Percentage value
    #[serde(rename = "PERCENT")]
    Percent,
    /// Whole number
    #[serde(rename = "INT")]
    Integer,
    /// Quality gate level (OK, ERROR, ...)
    #[serde(rename = "LEVEL")]
    Level,
    /// Whole number rendered in abbreviated form
    #[serde(rename = "SHORT_INT")]
    ShortInteger,
    /// Work duration rendered in abbreviated form
    #[serde(rename = "SHORT_WORK_DUR")]
    ShortWorkDuration,
    /// Opaque data payload
    #[serde(rename = "DATA")]
    Data,
}

impl MetricType {
    /// Every declared metric type
    pub const ALL: &'static [MetricType] = &[
        Self::Rating,
        Self::Percent,
        Self::Integer,
        Self::Level,
        Self::ShortInteger,
        Self::ShortWorkDuration,
        Self::Data,
    ];

    /// The wire identifier for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "RATING",
            Self::Percent => "PERCENT",
            Self::Integer => "INT",
            Self::Level => "LEVEL",
            Self::ShortInteger => "SHORT_INT",
            Self::ShortWorkDuration => "SHORT_WORK_DUR",
            Self::Data => "DATA",
        }
    }

    /// Parse a metric type from its exact wire identifier
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Percent => "Percent",
            Self::Integer => "Integer",
            Self::Level => "Level",
            Self::ShortInteger => "Short integer",
            Self::ShortWorkDuration => "Short work duration",
            Self::Data => "Data",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| OnboardingError::metric_type_not_found(s))
    }
}
