//! Project analysis tutorial
//!
//! A two-step onboarding flow: provide an analysis token, then run the
//! analysis with it. The user can go back to the token step at any time.
//!
//! - `state`: the step state machine
//! - `steps`: inputs handed to each step view
//! - `wizard`: the wizard component tying state and inputs together
//! - `runner`: interactive terminal driver

pub mod runner;
pub mod state;
pub mod steps;
pub mod wizard;

pub use runner::{TerminalPrompt, TokenPrompt, TutorialOutcome, TutorialRunner};
pub use state::{Transition, TransitionEvent, TutorialStep, WizardState};
pub use steps::{
    AnalysisStepProps, Component, CurrentUser, StepView, TokenStepProps, TutorialHeader,
};
pub use wizard::{TutorialContext, TutorialWizard};
