//! analysis-onboarding - project analysis onboarding and metric catalog
//!
//! This library provides the onboarding tutorial that walks a user through
//! providing an analysis token and running a first analysis, together with
//! the catalog of metric identifiers the analysis backend understands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and translated messages
//! - `error`: Custom error types
//! - `metrics`: Metric keys, metric types and the membership check
//! - `export`: Metric catalog export (CSV, JSON, YAML)
//! - `tutorial`: The tutorial wizard state machine and terminal runner
//! - `journal`: Append-only log of wizard transitions
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `onboarding` binary
//!
//! # Example
//!
//! ```rust
//! use onboarding::tutorial::{
//!     Component, CurrentUser, TutorialContext, TutorialStep, TutorialWizard,
//! };
//!
//! let context = TutorialContext::new(
//!     Component::new("my-project", "My Project"),
//!     CurrentUser::new("admin"),
//!     "http://localhost:9000",
//! );
//! let mut wizard = TutorialWizard::new(context);
//! wizard.on_token_issued("squ_example");
//! assert_eq!(wizard.current_step(), TutorialStep::Analysis);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod journal;
pub mod metrics;
pub mod tutorial;

pub use error::{OnboardingError, OnboardingResult};
pub use metrics::{is_metric_key, MetricKey, MetricType};
