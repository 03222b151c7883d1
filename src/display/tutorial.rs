//! Tutorial step display formatting
//!
//! Terminal renderings of the header and the two step views.

use crate::config::messages::Translate;
use crate::tutorial::{AnalysisStepProps, TokenStepProps, TutorialHeader};

/// Tokens shorter than this are masked entirely
const MASK_MIN_REVEAL_LEN: usize = 12;

/// Hide a token, keeping its first four characters only when at most a
/// third of it would show
pub fn mask_token(token: &str) -> String {
    if token.chars().count() < MASK_MIN_REVEAL_LEN {
        return "****".to_string();
    }
    let visible: String = token.chars().take(4).collect();
    format!("{}****", visible)
}

/// Format the page header
pub fn format_header(header: &TutorialHeader) -> String {
    let rule = "=".repeat(header.title.chars().count().max(20));
    format!("{}\n{}\n{}\n\n{}\n", rule, header.title, rule, header.description)
}

fn step_title(number: u8, title: &str, finished: bool) -> String {
    let mark = if finished { " [done]" } else { "" };
    let title = format!("Step {}: {}{}", number, title, mark);
    let underline = "-".repeat(title.chars().count());
    format!("{}\n{}\n", title, underline)
}

/// Format the token step
pub fn format_token_step(props: &TokenStepProps<'_>, messages: &impl Translate) -> String {
    let mut output = step_title(
        props.step_number,
        &messages.translate("onboarding.token.header"),
        props.finished,
    );

    if !props.open {
        return output;
    }

    output.push_str(&messages.translate("onboarding.token.text"));
    output.push_str("\n\n");
    output.push_str(&format!(
        "Generate a token for user '{}' named {} for project '{}',\nthen paste it below.\n",
        props.current_user.login, props.initial_token_name, props.project_key
    ));
    if props.finished {
        output.push_str("A token was already provided; entering a new one replaces it.\n");
    }

    output
}

/// Format the analysis step
pub fn format_analysis_step(props: &AnalysisStepProps<'_>, messages: &impl Translate) -> String {
    let mut output = step_title(
        props.step_number,
        &messages.translate("onboarding.analysis.header"),
        false,
    );

    if !props.open {
        return output;
    }

    let token = match props.token {
        Some(token) if props.ready() => token,
        _ => {
            output.push_str("Provide a token first.\n");
            return output;
        }
    };

    let mode = if props.is_local { "local" } else { "remote" };
    output.push_str(&format!("  Project key: {}\n", props.component.key));
    output.push_str(&format!("  Project:     {}\n", props.component.name));
    output.push_str(&format!("  Server:      {} ({})\n", props.base_url, mode));
    output.push_str(&format!("  Token:       {}\n", mask_token(token)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Messages;
    use crate::tutorial::{Component, CurrentUser, TutorialContext, TutorialWizard};

    fn wizard() -> TutorialWizard {
        TutorialWizard::new(TutorialContext::new(
            Component::new("my-project", "My Project"),
            CurrentUser::new("admin"),
            "http://localhost:9000",
        ))
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("squ_abcdef123"), "squ_****");
        assert_eq!(mask_token("abc"), "****");
        assert_eq!(mask_token(""), "****");
        assert_eq!(mask_token("abcde"), "****");
        assert_eq!(mask_token("abcdefghijk"), "****");
        assert_eq!(mask_token("abcdefghijkl"), "abcd****");
    }

    #[test]
    fn test_format_header() {
        let header = TutorialHeader {
            title: "Analyze your project".into(),
            description: "Description".into(),
        };
        let output = format_header(&header);
        assert!(output.contains("Analyze your project"));
        assert!(output.ends_with("Description\n"));
    }

    #[test]
    fn test_format_open_token_step() {
        let wizard = wizard();
        let output = format_token_step(&wizard.token_step(), &Messages::default());

        assert!(output.starts_with("Step 1: Provide a token\n"));
        assert!(output.contains("Analyze \"My Project\""));
        assert!(!output.contains("[done]"));
    }

    #[test]
    fn test_format_analysis_step_masks_token() {
        let mut wizard = wizard();
        wizard.on_token_issued("squ_0123456789");
        let output = format_analysis_step(&wizard.analysis_step(), &Messages::default());

        assert!(output.contains("my-project"));
        assert!(output.contains("http://localhost:9000 (remote)"));
        assert!(output.contains("squ_****"));
        assert!(!output.contains("0123456789"));
    }

    #[test]
    fn test_format_closed_steps_show_title_only() {
        let mut wizard = wizard();
        let analysis = format_analysis_step(&wizard.analysis_step(), &Messages::default());
        assert_eq!(analysis.lines().count(), 2);

        wizard.on_token_issued("abc12345");
        let token = format_token_step(&wizard.token_step(), &Messages::default());
        assert!(token.contains("[done]"));
        assert_eq!(token.lines().count(), 2);
    }
}
