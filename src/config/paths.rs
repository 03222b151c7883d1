//! Where onboarding keeps its files
//!
//! One directory holds `config.json`, the optional `messages.json`
//! translation overrides, and `journal.log`. It is chosen in this order:
//!
//! 1. `ONBOARDING_CLI_DATA_DIR`
//! 2. `$XDG_CONFIG_HOME/analysis-onboarding`, else
//!    `$HOME/.config/analysis-onboarding` (Unix)
//! 3. `%APPDATA%\analysis-onboarding` (Windows)

use std::path::{Path, PathBuf};

use crate::error::OnboardingError;

/// Overrides the onboarding directory
pub const DATA_DIR_ENV: &str = "ONBOARDING_CLI_DATA_DIR";

const DIR_NAME: &str = "analysis-onboarding";

const SETTINGS_FILE: &str = "config.json";
const MESSAGES_FILE: &str = "messages.json";
const JOURNAL_FILE: &str = "journal.log";

#[derive(Debug, Clone)]
pub struct OnboardingPaths {
    base_dir: PathBuf,
}

impl OnboardingPaths {
    /// Resolve the onboarding directory from the environment
    ///
    /// Fails only when no override is set and the platform's config
    /// location cannot be found either.
    pub fn new() -> Result<Self, OnboardingError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => platform_config_dir()?.join(DIR_NAME),
        };
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn messages_file(&self) -> PathBuf {
        self.base_dir.join(MESSAGES_FILE)
    }

    pub fn journal_file(&self) -> PathBuf {
        self.base_dir.join(JOURNAL_FILE)
    }

    /// Create the onboarding directory before the first write into it
    pub fn ensure_directories(&self) -> Result<(), OnboardingError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            OnboardingError::Io(format!(
                "Cannot create onboarding directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// True once `onboarding init` (or a settings save) has written `config.json`
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn platform_config_dir() -> Result<PathBuf, OnboardingError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg));
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .ok_or_else(|| {
            OnboardingError::Config(format!(
                "Neither {}, XDG_CONFIG_HOME nor HOME is set; cannot place onboarding files",
                DATA_DIR_ENV
            ))
        })
}

#[cfg(windows)]
fn platform_config_dir() -> Result<PathBuf, OnboardingError> {
    std::env::var_os("APPDATA").map(PathBuf::from).ok_or_else(|| {
        OnboardingError::Config(format!(
            "Neither {} nor APPDATA is set; cannot place onboarding files",
            DATA_DIR_ENV
        ))
    })
}
