//! Journal error model.

use thiserror::Error;

/// Result type used across the journal core.
pub type JournalResult<T> = Result<T, JournalError>;

/// Journal-level error.
///
/// Storage backends have their own error types; the repository maps them onto
/// the two persistence kinds here so callers only ever see this taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// A required field was missing, blank, or out of range.
    #[error("invalid entry input: {0}")]
    InvalidEntryInput(String),

    /// Stored entries could not be read or decoded.
    ///
    /// `EntryRepository::list` recovers from this; only `try_list` returns it.
    #[error("failed to read persisted entries: {0}")]
    PersistenceReadFailed(String),

    /// The store rejected a write; the entry was not saved.
    #[error("failed to persist entries: {0}")]
    PersistenceWriteFailed(String),

    /// An entry with the same identifier is already persisted.
    #[error("duplicate entry id: {0}")]
    DuplicateId(String),
}

impl JournalError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidEntryInput(msg.into())
    }

    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::PersistenceReadFailed(msg.into())
    }

    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::PersistenceWriteFailed(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    /// Whether the user-visible effect is "entry not saved".
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::PersistenceWriteFailed(_))
    }
}
