//! Interactive tutorial runner
//!
//! Drives a [`TutorialWizard`] from the terminal: prints the visible step,
//! reads the user's answer, and fires the matching transition.

use std::io::{self, Write};

use crate::config::messages::Translate;
use crate::display::tutorial::{format_analysis_step, format_header, format_token_step};
use crate::error::{OnboardingError, OnboardingResult};
use crate::journal::{JournalEntry, JournalLogger, SessionId};

use super::state::{Transition, TutorialStep};
use super::wizard::TutorialWizard;

/// Source of user answers
pub trait TokenPrompt {
    /// Read one line of visible input
    fn read_line(&mut self, prompt: &str) -> OnboardingResult<String>;

    /// Read a secret without echoing it
    fn read_secret(&mut self, prompt: &str) -> OnboardingResult<String>;
}

/// Reads answers from the controlling terminal
pub struct TerminalPrompt;

impl TokenPrompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> OnboardingResult<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;
        if read == 0 {
            return Err(OnboardingError::Io("Unexpected end of input".into()));
        }

        Ok(input.trim().to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> OnboardingResult<String> {
        rpassword::prompt_password(prompt)
            .map_err(|e| OnboardingError::Io(format!("Failed to read token: {}", e)))
    }
}

/// What happened during one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialOutcome {
    /// Every transition, in order
    pub transitions: Vec<Transition>,
    /// Whether a token was held when the run ended
    pub completed: bool,
}

/// Runs the tutorial loop until the user quits
pub struct TutorialRunner<'a, T: Translate> {
    messages: &'a T,
    instance_name: String,
    journal: Option<JournalLogger>,
    session: SessionId,
}

impl<'a, T: Translate> TutorialRunner<'a, T> {
    pub fn new(messages: &'a T, instance_name: impl Into<String>) -> Self {
        Self {
            messages,
            instance_name: instance_name.into(),
            journal: None,
            session: SessionId::new(),
        }
    }

    /// Record transitions to the given journal
    pub fn with_journal(mut self, journal: JournalLogger) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Run the wizard, reading answers from `prompt` and writing to `out`
    pub fn run<P: TokenPrompt, W: Write>(
        &self,
        wizard: &mut TutorialWizard,
        prompt: &mut P,
        out: &mut W,
    ) -> OnboardingResult<TutorialOutcome> {
        let header = wizard.header(self.messages, &self.instance_name);
        writeln!(out, "{}", format_header(&header))?;

        let mut transitions = Vec::new();

        loop {
            match wizard.current_step() {
                TutorialStep::Token => {
                    writeln!(out, "{}", format_token_step(&wizard.token_step(), self.messages))?;

                    let token = prompt.read_secret("Token (input hidden): ")?;
                    let token = token.trim();
                    if token.is_empty() {
                        let again =
                            prompt.read_line("No token entered. Try again? (yes/no) [yes]: ")?;
                        if is_no(&again) {
                            writeln!(out, "Tutorial cancelled.")?;
                            break;
                        }
                        continue;
                    }

                    let transition = wizard.on_token_issued(token);
                    self.record(wizard, &transition)?;
                    transitions.push(transition);
                }
                TutorialStep::Analysis => {
                    writeln!(
                        out,
                        "{}",
                        format_analysis_step(&wizard.analysis_step(), self.messages)
                    )?;

                    let choice = prompt.read_line("[r] Re-open token step  [q] Quit [q]: ")?;
                    match choice.trim().to_lowercase().as_str() {
                        "" | "q" | "quit" => break,
                        "r" | "reopen" => {
                            let transition = wizard.on_reopen_token_step();
                            self.record(wizard, &transition)?;
                            transitions.push(transition);
                        }
                        other => writeln!(out, "Unknown choice '{}'.", other)?,
                    }
                }
            }
        }

        Ok(TutorialOutcome {
            transitions,
            completed: wizard.state().has_token(),
        })
    }

    fn record(&self, wizard: &TutorialWizard, transition: &Transition) -> OnboardingResult<()> {
        if let Some(journal) = &self.journal {
            let entry =
                JournalEntry::new(self.session, &wizard.context().component.key, transition);
            journal.append(&entry)?;
        }
        Ok(())
    }
}

fn is_no(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Messages;
    use crate::tutorial::{Component, CurrentUser, TransitionEvent, TutorialContext};
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Replays canned answers
    struct ScriptedPrompt {
        lines: VecDeque<String>,
        secrets: VecDeque<String>,
    }

    impl ScriptedPrompt {
        fn new(lines: &[&str], secrets: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                secrets: secrets.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl TokenPrompt for ScriptedPrompt {
        fn read_line(&mut self, _prompt: &str) -> OnboardingResult<String> {
            self.lines
                .pop_front()
                .ok_or_else(|| OnboardingError::Io("script exhausted".into()))
        }

        fn read_secret(&mut self, _prompt: &str) -> OnboardingResult<String> {
            self.secrets
                .pop_front()
                .ok_or_else(|| OnboardingError::Io("script exhausted".into()))
        }
    }

    fn wizard() -> TutorialWizard {
        TutorialWizard::new(TutorialContext::new(
            Component::new("my-project", "My Project"),
            CurrentUser::new("admin"),
            "http://localhost:9000",
        ))
    }

    #[test]
    fn test_issue_then_quit() {
        let messages = Messages::default();
        let runner = TutorialRunner::new(&messages, "SonarQube");
        let mut wizard = wizard();
        let mut prompt = ScriptedPrompt::new(&["q"], &["squ_token123"]);
        let mut out = Vec::new();

        let outcome = runner.run(&mut wizard, &mut prompt, &mut out).unwrap();

        assert!(outcome.completed);
        assert_eq!(outcome.transitions.len(), 1);
        assert_eq!(outcome.transitions[0].event, TransitionEvent::TokenIssued);
        assert_eq!(wizard.state().token(), Some("squ_token123"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Analyze your project"));
        assert!(text.contains("on SonarQube"));
        assert!(text.contains("squ_****"));
        assert!(!text.contains("squ_token123"));
    }

    #[test]
    fn test_reopen_and_reissue() {
        let messages = Messages::default();
        let runner = TutorialRunner::new(&messages, "SonarQube");
        let mut wizard = wizard();
        let mut prompt = ScriptedPrompt::new(&["r", ""], &["first-token", "second-token"]);
        let mut out = Vec::new();

        let outcome = runner.run(&mut wizard, &mut prompt, &mut out).unwrap();

        let events: Vec<_> = outcome.transitions.iter().map(|t| t.event).collect();
        assert_eq!(
            events,
            vec![
                TransitionEvent::TokenIssued,
                TransitionEvent::TokenStepReopened,
                TransitionEvent::TokenReissued,
            ]
        );
        assert_eq!(wizard.state().token(), Some("second-token"));
        assert_eq!(wizard.current_step(), TutorialStep::Analysis);
    }

    #[test]
    fn test_empty_token_then_cancel() {
        let messages = Messages::default();
        let runner = TutorialRunner::new(&messages, "SonarQube");
        let mut wizard = wizard();
        let mut prompt = ScriptedPrompt::new(&["yes", "no"], &["", "   "]);
        let mut out = Vec::new();

        let outcome = runner.run(&mut wizard, &mut prompt, &mut out).unwrap();

        assert!(!outcome.completed);
        assert!(outcome.transitions.is_empty());
        assert_eq!(wizard.current_step(), TutorialStep::Token);
        assert!(String::from_utf8(out).unwrap().contains("Tutorial cancelled."));
    }

    #[test]
    fn test_unknown_choice_keeps_step() {
        let messages = Messages::default();
        let runner = TutorialRunner::new(&messages, "SonarQube");
        let mut wizard = wizard();
        let mut prompt = ScriptedPrompt::new(&["x", "q"], &["tok-12345"]);
        let mut out = Vec::new();

        let outcome = runner.run(&mut wizard, &mut prompt, &mut out).unwrap();

        assert_eq!(outcome.transitions.len(), 1);
        assert!(String::from_utf8(out).unwrap().contains("Unknown choice 'x'."));
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let messages = Messages::default();
        let runner = TutorialRunner::new(&messages, "SonarQube");
        let mut wizard = wizard();
        let mut prompt = ScriptedPrompt::new(&[], &[]);
        let mut out = Vec::new();

        let err = runner.run(&mut wizard, &mut prompt, &mut out).unwrap_err();
        assert!(matches!(err, OnboardingError::Io(_)));
    }

    #[test]
    fn test_transitions_journaled() {
        let temp_dir = TempDir::new().unwrap();
        let journal_path = temp_dir.path().join("journal.log");

        let messages = Messages::default();
        let runner = TutorialRunner::new(&messages, "SonarQube")
            .with_journal(JournalLogger::new(journal_path.clone()));
        let session = runner.session();
        let mut wizard = wizard();
        let mut prompt = ScriptedPrompt::new(&["r", "q"], &["tok-aaaa", "tok-bbbb"]);
        let mut out = Vec::new();

        runner.run(&mut wizard, &mut prompt, &mut out).unwrap();

        let entries = JournalLogger::new(journal_path.clone()).entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.session == session));
        assert!(entries.iter().all(|e| e.project_key == "my-project"));

        let raw = std::fs::read_to_string(journal_path).unwrap();
        assert!(!raw.contains("tok-aaaa"));
        assert!(!raw.contains("tok-bbbb"));
    }
}
