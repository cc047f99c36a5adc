//! Strongly-typed identifiers used across the journal.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::JournalError;

/// Identifier of a journal entry.
///
/// Identifiers are opaque strings. Freshly generated ones are UUIDv7 (time-ordered),
/// but any non-empty string loaded from storage is accepted as-is: older records
/// used millisecond timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a new identifier.
    ///
    /// Prefer passing IDs explicitly in tests for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wrap an existing identifier, rejecting blank values.
    pub fn parse(value: impl Into<String>) -> Result<Self, JournalError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(JournalError::invalid_input("id cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Uuid> for EntryId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl From<EntryId> for String {
    fn from(value: EntryId) -> Self {
        value.0
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntryId {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert!(!a.is_blank());
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(matches!(
            EntryId::parse("   "),
            Err(JournalError::InvalidEntryInput(_))
        ));
        assert!("".parse::<EntryId>().is_err());
    }

    #[test]
    fn legacy_timestamp_ids_are_accepted() {
        let id: EntryId = "1718035200000".parse().unwrap();
        assert_eq!(id.as_str(), "1718035200000");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntryId::parse("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let back: EntryId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }
}
