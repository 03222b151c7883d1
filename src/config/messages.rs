//! Translated message lookup
//!
//! The wizard only asks for text by key. `Messages` answers with bundled
//! English defaults, overridden by entries from `messages.json`.

use std::collections::HashMap;

use super::paths::OnboardingPaths;
use crate::error::OnboardingError;

/// Translation lookup service
pub trait Translate {
    /// Return the text for `key`, or the key itself when unknown
    fn translate(&self, key: &str) -> String;
}

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("onboarding.project_analysis.header", "Analyze your project"),
    (
        "onboarding.project_analysis.description",
        "We initialized your project on {instance}, now it's up to you to launch analyses!",
    ),
    ("onboarding.token.header", "Provide a token"),
    (
        "onboarding.token.text",
        "The token is used to identify you when an analysis is performed. \
         If it has been compromised, you can revoke it at any point in your user account.",
    ),
    ("onboarding.analysis.header", "Run analysis on your project"),
];

/// Message table keyed by translation key
#[derive(Debug, Clone)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Default for Messages {
    fn default() -> Self {
        let entries = DEFAULT_MESSAGES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }
}

impl Messages {
    /// Load bundled defaults, then apply overrides from `messages.json` if present
    pub fn load(paths: &OnboardingPaths) -> Result<Self, OnboardingError> {
        let mut messages = Self::default();
        let path = paths.messages_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                OnboardingError::Io(format!("Failed to read messages file: {}", e))
            })?;
            let overrides: HashMap<String, String> =
                serde_json::from_str(&contents).map_err(|e| {
                    OnboardingError::Config(format!("Failed to parse messages file: {}", e))
                })?;
            messages.entries.extend(overrides);
        }

        Ok(messages)
    }

    /// Add or replace a single message
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl Translate for Messages {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Replace the `{instance}` placeholder with the instance name
pub fn with_instance(message: &str, instance_name: &str) -> String {
    message.replace("{instance}", instance_name)
}
