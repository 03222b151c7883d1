//! Tutorial CLI command
//!
//! Runs the project analysis tutorial interactively.

use clap::Args;
use std::io;

use crate::config::{Messages, OnboardingPaths, Settings};
use crate::error::{OnboardingError, OnboardingResult};
use crate::journal::JournalLogger;
use crate::tutorial::{
    Component, CurrentUser, TerminalPrompt, TutorialContext, TutorialRunner, TutorialWizard,
};

/// Arguments for the tutorial command
#[derive(Args, Debug)]
pub struct TutorialArgs {
    /// Key of the project to analyze
    #[arg(short = 'k', long)]
    pub project_key: String,

    /// Display name of the project (defaults to the key)
    #[arg(short = 'n', long)]
    pub project_name: Option<String>,

    /// Login of the user the token belongs to
    #[arg(short, long, env = "ONBOARDING_LOGIN", default_value = "admin")]
    pub login: String,

    /// Server base URL (overrides settings)
    #[arg(long)]
    pub base_url: Option<String>,

    /// The server runs locally
    #[arg(long)]
    pub local: bool,

    /// Do not record transitions in the journal
    #[arg(long)]
    pub no_journal: bool,
}

impl TutorialArgs {
    /// Build the wizard inputs from arguments and settings
    pub fn context(&self, settings: &Settings) -> OnboardingResult<TutorialContext> {
        let key = self.project_key.trim();
        if key.is_empty() {
            return Err(OnboardingError::Validation(
                "Project key cannot be empty".into(),
            ));
        }

        let name = self
            .project_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(key);

        let mut effective = settings.clone();
        if let Some(url) = &self.base_url {
            effective.base_url = url.clone();
            effective.validate()?;
        }

        Ok(TutorialContext::new(
            Component::new(key, name),
            CurrentUser::new(self.login.clone()),
            effective.base_url,
        )
        .local(self.local || settings.is_local))
    }
}

/// Handle the tutorial command
pub fn handle_tutorial_command(
    paths: &OnboardingPaths,
    settings: &Settings,
    args: TutorialArgs,
) -> OnboardingResult<()> {
    let context = args.context(settings)?;
    let messages = Messages::load(paths)?;

    let mut runner = TutorialRunner::new(&messages, settings.instance_name.clone());
    if settings.journal_enabled && !args.no_journal {
        paths.ensure_directories()?;
        runner = runner.with_journal(JournalLogger::new(paths.journal_file()));
    }

    let mut wizard = TutorialWizard::new(context);
    let outcome = runner.run(&mut wizard, &mut TerminalPrompt, &mut io::stdout())?;

    if outcome.completed {
        println!("Tutorial finished for project '{}'.", wizard.context().component.key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(key: &str) -> TutorialArgs {
        TutorialArgs {
            project_key: key.into(),
            project_name: None,
            login: "admin".into(),
            base_url: None,
            local: false,
            no_journal: true,
        }
    }

    #[test]
    fn test_context_defaults() {
        let context = args("my-project").context(&Settings::default()).unwrap();
        assert_eq!(context.component.key, "my-project");
        assert_eq!(context.component.name, "my-project");
        assert_eq!(context.base_url, "http://localhost:9000");
        assert!(!context.is_local);
    }

    #[test]
    fn test_context_overrides() {
        let mut a = args("k");
        a.project_name = Some("Nice Name".into());
        a.base_url = Some("https://sonar.example.com".into());
        a.local = true;

        let context = a.context(&Settings::default()).unwrap();
        assert_eq!(context.component.name, "Nice Name");
        assert_eq!(context.base_url, "https://sonar.example.com");
        assert!(context.is_local);
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = args("  ").context(&Settings::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut a = args("k");
        a.base_url = Some("localhost".into());
        assert!(a.context(&Settings::default()).is_err());
    }
}
