//! Append-only JSON-lines file behind the transition journal

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{OnboardingError, OnboardingResult};

use super::entry::JournalEntry;

/// Writer and reader for `journal.log`
pub struct JournalLogger {
    path: PathBuf,
}

impl JournalLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one transition; the line is flushed before returning
    pub fn append(&self, entry: &JournalEntry) -> OnboardingResult<()> {
        let line = serde_json::to_string(entry).map_err(|e| {
            OnboardingError::Json(format!("Cannot encode transition for the journal: {}", e))
        })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;
        writeln!(file, "{}", line).map_err(|e| self.io_error("append to", e))?;
        file.flush().map_err(|e| self.io_error("flush", e))
    }

    /// Every recorded transition, oldest first. A missing file is an empty journal.
    pub fn entries(&self) -> OnboardingResult<Vec<JournalEntry>> {
        self.tail(usize::MAX)
    }

    /// The last `limit` transitions, oldest first
    ///
    /// Only the kept lines are decoded, so a damaged line further back does
    /// not hide recent runs.
    pub fn tail(&self, limit: usize) -> OnboardingResult<Vec<JournalEntry>> {
        if limit == 0 || !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| self.io_error("open", e))?;
        let mut kept: VecDeque<(usize, String)> = VecDeque::new();

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            if kept.len() == limit {
                kept.pop_front();
            }
            kept.push_back((index + 1, line));
        }

        kept.into_iter()
            .map(|(line_no, line)| {
                serde_json::from_str(&line).map_err(|e| {
                    OnboardingError::Json(format!(
                        "{} line {} is not a journal entry: {}",
                        self.path.display(),
                        line_no,
                        e
                    ))
                })
            })
            .collect()
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> OnboardingError {
        OnboardingError::Io(format!(
            "Cannot {} journal {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::SessionId;
    use crate::tutorial::{TransitionEvent, WizardState};
    use tempfile::TempDir;

    fn journal_in(dir: &TempDir) -> JournalLogger {
        JournalLogger::new(dir.path().join("journal.log"))
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let journal = journal_in(&dir);
        let session = SessionId::new();
        let mut state = WizardState::new();

        journal
            .append(&JournalEntry::new(session, "p", &state.on_token_issued("abc")))
            .unwrap();
        journal
            .append(&JournalEntry::new(session, "p", &state.on_reopen_token_step()))
            .unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, TransitionEvent::TokenIssued);
        assert_eq!(entries[1].event, TransitionEvent::TokenStepReopened);
        assert_eq!(entries[1].session, session);
    }

    #[test]
    fn test_token_never_written() {
        let dir = TempDir::new().unwrap();
        let journal = journal_in(&dir);
        let mut state = WizardState::new();

        journal
            .append(&JournalEntry::new(
                SessionId::new(),
                "p",
                &state.on_token_issued("squ_0123456789"),
            ))
            .unwrap();

        let raw = std::fs::read_to_string(journal.path()).unwrap();
        assert!(!raw.contains("squ_0123456789"));
    }

    #[test]
    fn test_tail_keeps_latest() {
        let dir = TempDir::new().unwrap();
        let journal = journal_in(&dir);
        let mut state = WizardState::new();

        for i in 0..6 {
            let transition = state.on_token_issued(format!("t{}", i));
            journal
                .append(&JournalEntry::new(SessionId::new(), format!("p{}", i), &transition))
                .unwrap();
        }

        let recent = journal.tail(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].project_key, "p4");
        assert_eq!(recent[1].project_key, "p5");
        assert!(journal.tail(0).unwrap().is_empty());
    }

    #[test]
    fn test_tail_skips_damaged_older_lines() {
        let dir = TempDir::new().unwrap();
        let journal = journal_in(&dir);
        std::fs::write(journal.path(), "not json\n").unwrap();

        let mut state = WizardState::new();
        journal
            .append(&JournalEntry::new(SessionId::new(), "p", &state.on_token_issued("t")))
            .unwrap();

        assert_eq!(journal.tail(1).unwrap().len(), 1);
        let err = journal.entries().unwrap_err();
        assert!(err.to_string().contains("line 1 is not a journal entry"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let journal = journal_in(&dir);
        assert!(!journal.path().exists());
        assert!(journal.entries().unwrap().is_empty());
    }
}
