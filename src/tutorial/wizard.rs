//! Tutorial wizard
//!
//! Owns one [`WizardState`] together with the pass-through inputs the step
//! views need, and derives the props for each view from the current state.

use crate::config::messages::{with_instance, Translate};

use super::state::{Transition, TutorialStep, WizardState};
use super::steps::{
    AnalysisStepProps, Component, CurrentUser, StepView, TokenStepProps, TutorialHeader,
};

/// Translation key of the page title
pub const HEADER_KEY: &str = "onboarding.project_analysis.header";
/// Translation key of the page description
pub const DESCRIPTION_KEY: &str = "onboarding.project_analysis.description";

/// Opaque inputs handed through to the step views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialContext {
    pub component: Component,
    pub current_user: CurrentUser,
    pub base_url: String,
    pub is_local: bool,
}

impl TutorialContext {
    pub fn new(
        component: Component,
        current_user: CurrentUser,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            component,
            current_user,
            base_url: base_url.into(),
            is_local: false,
        }
    }

    /// Mark the server as running locally
    pub fn local(mut self, is_local: bool) -> Self {
        self.is_local = is_local;
        self
    }
}

/// The two-step project analysis tutorial
#[derive(Debug, Clone)]
pub struct TutorialWizard {
    context: TutorialContext,
    state: WizardState,
}

impl TutorialWizard {
    /// Create a wizard positioned on the token step
    pub fn new(context: TutorialContext) -> Self {
        Self {
            context,
            state: WizardState::new(),
        }
    }

    pub fn context(&self) -> &TutorialContext {
        &self.context
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> TutorialStep {
        self.state.current_step()
    }

    /// Called by the token step once a token exists
    pub fn on_token_issued(&mut self, token: impl Into<String>) -> Transition {
        self.state.on_token_issued(token)
    }

    /// Called when the user opens the token step again
    pub fn on_reopen_token_step(&mut self) -> Transition {
        self.state.on_reopen_token_step()
    }

    /// Props for the token step view
    pub fn token_step(&self) -> TokenStepProps<'_> {
        TokenStepProps {
            current_user: &self.context.current_user,
            project_key: &self.context.component.key,
            finished: self.state.has_token(),
            initial_token_name: format!("Analyze \"{}\"", self.context.component.name),
            open: self.state.current_step() == TutorialStep::Token,
            step_number: TutorialStep::Token.number(),
        }
    }

    /// Props for the analysis step view
    pub fn analysis_step(&self) -> AnalysisStepProps<'_> {
        AnalysisStepProps {
            component: &self.context.component,
            base_url: &self.context.base_url,
            is_local: self.context.is_local,
            open: self.state.current_step() == TutorialStep::Analysis,
            token: self.state.token(),
            step_number: TutorialStep::Analysis.number(),
        }
    }

    /// The one view selected by the current step
    pub fn visible_step(&self) -> StepView<'_> {
        match self.state.current_step() {
            TutorialStep::Token => StepView::Token(self.token_step()),
            TutorialStep::Analysis => StepView::Analysis(self.analysis_step()),
        }
    }

    /// Page header text
    pub fn header(&self, messages: &impl Translate, instance_name: &str) -> TutorialHeader {
        TutorialHeader {
            title: messages.translate(HEADER_KEY),
            description: with_instance(&messages.translate(DESCRIPTION_KEY), instance_name),
        }
    }
}
