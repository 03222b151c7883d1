//! Transition journal for the tutorial wizard
//!
//! Records every wizard transition in an append-only log, one JSON object
//! per line. Tokens are never written; the journal is not read back to
//! restore wizard state.
//!
//! # Example
//!
//! ```rust,ignore
//! use onboarding::journal::{JournalEntry, JournalLogger, SessionId};
//!
//! let logger = JournalLogger::new(paths.journal_file());
//! let session = SessionId::new();
//!
//! let transition = wizard.on_token_issued(token);
//! logger.append(&JournalEntry::new(session, "my-project", &transition))?;
//! ```

mod entry;
mod logger;

pub use entry::{JournalEntry, SessionId};
pub use logger::JournalLogger;
