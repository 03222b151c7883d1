//! Journal CLI command
//!
//! Shows recent tutorial transitions.

use crate::config::paths::OnboardingPaths;
use crate::error::OnboardingResult;
use crate::journal::JournalLogger;

/// Print the most recent journal entries
pub fn handle_journal_command(paths: &OnboardingPaths, limit: usize) -> OnboardingResult<()> {
    let entries = JournalLogger::new(paths.journal_file()).tail(limit)?;

    if entries.is_empty() {
        println!("No tutorial runs recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
