//! Wizard state machine
//!
//! Two steps, `Token` and `Analysis`, with no terminal state. Transitions are
//! total and only mutate the state; callers decide what to do with the
//! returned [`Transition`].

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

/// Step of the project analysis tutorial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorialStep {
    /// Provide an analysis token
    #[default]
    Token,
    /// Run the analysis with the token
    Analysis,
}

impl TutorialStep {
    /// 1-based position of the step in the tutorial
    pub fn number(&self) -> u8 {
        match self {
            Self::Token => 1,
            Self::Analysis => 2,
        }
    }
}

impl fmt::Display for TutorialStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => write!(f, "token"),
            Self::Analysis => write!(f, "analysis"),
        }
    }
}

/// What caused a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionEvent {
    /// First token provided
    TokenIssued,
    /// A token was provided while one was already held
    TokenReissued,
    /// The token step was opened again
    TokenStepReopened,
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenIssued => write!(f, "token_issued"),
            Self::TokenReissued => write!(f, "token_reissued"),
            Self::TokenStepReopened => write!(f, "token_step_reopened"),
        }
    }
}

/// Record of a single state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub event: TransitionEvent,
    pub from: TutorialStep,
    pub to: TutorialStep,
}

/// Mutable state owned by one wizard instance
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    current_step: TutorialStep,
    token: Option<Zeroizing<String>>,
}

impl WizardState {
    /// Start on the token step with no token
    pub fn new() -> Self {
        Self::default()
    }

    /// The step currently shown
    pub fn current_step(&self) -> TutorialStep {
        self.current_step
    }

    /// The most recently issued token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.as_str())
    }

    /// Whether a non-empty token has been issued
    pub fn has_token(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Store the token and move to the analysis step.
    ///
    /// Accepted from either step; a token issued while one is already held
    /// replaces it.
    pub fn on_token_issued(&mut self, token: impl Into<String>) -> Transition {
        let event = if self.has_token() {
            TransitionEvent::TokenReissued
        } else {
            TransitionEvent::TokenIssued
        };
        let from = self.current_step;

        self.token = Some(Zeroizing::new(token.into()));
        self.current_step = TutorialStep::Analysis;

        Transition {
            event,
            from,
            to: self.current_step,
        }
    }

    /// Go back to the token step. The token is kept.
    pub fn on_reopen_token_step(&mut self) -> Transition {
        let from = self.current_step;
        self.current_step = TutorialStep::Token;

        Transition {
            event: TransitionEvent::TokenStepReopened,
            from,
            to: self.current_step,
        }
    }
}

// Never print the token
impl fmt::Debug for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardState")
            .field("current_step", &self.current_step)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), TutorialStep::Token);
        assert_eq!(state.token(), None);
        assert!(!state.has_token());
    }

    #[test]
    fn test_token_issued() {
        let mut state = WizardState::new();
        let transition = state.on_token_issued("abc");

        assert_eq!(state.current_step(), TutorialStep::Analysis);
        assert_eq!(state.token(), Some("abc"));
        assert!(state.has_token());
        assert_eq!(
            transition,
            Transition {
                event: TransitionEvent::TokenIssued,
                from: TutorialStep::Token,
                to: TutorialStep::Analysis,
            }
        );
    }

    #[test]
    fn test_reopen_keeps_token() {
        let mut state = WizardState::new();
        state.on_token_issued("abc");
        let transition = state.on_reopen_token_step();

        assert_eq!(state.current_step(), TutorialStep::Token);
        assert_eq!(state.token(), Some("abc"));
        assert_eq!(transition.from, TutorialStep::Analysis);
        assert_eq!(transition.to, TutorialStep::Token);
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let mut once = WizardState::new();
        once.on_token_issued("abc");
        let mut twice = once.clone();

        once.on_reopen_token_step();
        twice.on_reopen_token_step();
        twice.on_reopen_token_step();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_reopen_from_initial_state() {
        let mut state = WizardState::new();
        state.on_reopen_token_step();
        assert_eq!(state, WizardState::new());
    }

    #[test]
    fn test_token_issued_in_analysis_overwrites() {
        let mut state = WizardState::new();
        state.on_token_issued("first");
        let transition = state.on_token_issued("second");

        assert_eq!(state.token(), Some("second"));
        assert_eq!(state.current_step(), TutorialStep::Analysis);
        assert_eq!(transition.event, TransitionEvent::TokenReissued);
        assert_eq!(transition.from, TutorialStep::Analysis);
    }

    #[test]
    fn test_cycles_indefinitely() {
        let mut state = WizardState::new();
        for i in 0..5 {
            state.on_token_issued(format!("token-{}", i));
            assert_eq!(state.current_step(), TutorialStep::Analysis);
            state.on_reopen_token_step();
            assert_eq!(state.current_step(), TutorialStep::Token);
        }
        assert_eq!(state.token(), Some("token-4"));
    }

    #[test]
    fn test_empty_token_is_not_finished() {
        let mut state = WizardState::new();
        state.on_token_issued("");
        assert_eq!(state.current_step(), TutorialStep::Analysis);
        assert!(!state.has_token());
    }

    #[test]
    fn test_token_after_empty_token_is_first_issue() {
        let mut state = WizardState::new();
        state.on_token_issued("");
        state.on_reopen_token_step();

        let transition = state.on_token_issued("squ_abc");
        assert_eq!(transition.event, TransitionEvent::TokenIssued);
        assert!(state.has_token());
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut state = WizardState::new();
        state.on_token_issued("squ_secret");
        let debug = format!("{:?}", state);
        assert!(!debug.contains("squ_secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(TutorialStep::Token.number(), 1);
        assert_eq!(TutorialStep::Analysis.number(), 2);
    }
}
