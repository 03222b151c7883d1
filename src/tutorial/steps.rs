//! Step view inputs
//!
//! What each step view receives from the wizard. The views themselves live
//! outside the state machine; see `display::tutorial` for the terminal ones.

/// The project being onboarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Project key used by the analysis backend
    pub key: String,
    /// Display name
    pub name: String,
}

impl Component {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// The logged-in user running the tutorial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub login: String,
    pub name: Option<String>,
}

impl CurrentUser {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
        }
    }
}

/// Inputs for the token step view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStepProps<'a> {
    pub current_user: &'a CurrentUser,
    pub project_key: &'a str,
    /// True once a token has been issued
    pub finished: bool,
    /// Suggested name for the token to generate
    pub initial_token_name: String,
    pub open: bool,
    pub step_number: u8,
}

/// Inputs for the analysis step view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisStepProps<'a> {
    pub component: &'a Component,
    pub base_url: &'a str,
    pub is_local: bool,
    pub open: bool,
    /// May be absent; check [`AnalysisStepProps::ready`] before showing instructions
    pub token: Option<&'a str>,
    pub step_number: u8,
}

impl AnalysisStepProps<'_> {
    /// Whether the step is open and has a token to show instructions with
    pub fn ready(&self) -> bool {
        self.open && self.token.is_some_and(|t| !t.is_empty())
    }
}

/// The single step view to show for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepView<'a> {
    Token(TokenStepProps<'a>),
    Analysis(AnalysisStepProps<'a>),
}

/// Translated page header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialHeader {
    pub title: String,
    pub description: String,
}
