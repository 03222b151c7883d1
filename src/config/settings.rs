//! User settings for analysis-onboarding
//!
//! Manages the server address, instance naming, and journal preferences.

use serde::{Deserialize, Serialize};

use super::paths::OnboardingPaths;
use crate::error::OnboardingError;

/// User settings for analysis-onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the analysis server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Instance name substituted into `{instance}` placeholders
    #[serde(default = "default_instance_name")]
    pub instance_name: String,

    /// Whether analyses run against a local server
    #[serde(default)]
    pub is_local: bool,

    /// Whether wizard transitions are written to the journal
    #[serde(default = "default_journal_enabled")]
    pub journal_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_instance_name() -> String {
    "SonarQube".to_string()
}

fn default_journal_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            base_url: default_base_url(),
            instance_name: default_instance_name(),
            is_local: false,
            journal_enabled: default_journal_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardingPaths) -> Result<Self, OnboardingError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                OnboardingError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OnboardingError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardingPaths) -> Result<(), OnboardingError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            OnboardingError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            OnboardingError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check that the base URL looks usable
    pub fn validate(&self) -> Result<(), OnboardingError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(OnboardingError::Config("base_url cannot be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(OnboardingError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        Ok(())
    }
}
