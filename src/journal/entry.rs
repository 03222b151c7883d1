//! Journal entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::tutorial::{Transition, TransitionEvent, TutorialStep};

/// Identifies one run of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ses-{}", &self.0.to_string()[..8])
    }
}

/// A single journal line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the transition happened (UTC)
    pub timestamp: DateTime<Utc>,

    /// Wizard run the transition belongs to
    pub session: SessionId,

    /// Project the wizard was run for
    pub project_key: String,

    pub event: TransitionEvent,
    pub from: TutorialStep,
    pub to: TutorialStep,
}

impl JournalEntry {
    /// Build an entry for a transition that just happened
    pub fn new(
        session: SessionId,
        project_key: impl Into<String>,
        transition: &Transition,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            session,
            project_key: project_key.into(),
            event: transition.event,
            from: transition.from,
            to: transition.to,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} {} ({} -> {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.session,
            self.project_key,
            self.event,
            self.from,
            self.to
        )
    }
}
