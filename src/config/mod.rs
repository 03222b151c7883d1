//! Configuration module for analysis-onboarding
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Translated message lookup

pub mod messages;
pub mod paths;
pub mod settings;

pub use messages::{Messages, Translate};
pub use paths::OnboardingPaths;
pub use settings::Settings;
