//! Entry construction from captured inputs.

use chrono::{DateTime, Utc};

use traveljournal_core::{EntryId, JournalResult};

use crate::entry::{Coordinates, TravelEntry};

/// Builds new entries once image, position and address are all known.
///
/// Pure apart from identifier and clock reads; performs no I/O and persists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntryFactory;

impl EntryFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create an entry with a fresh UUIDv7 identifier and the current time.
    ///
    /// The address must already be resolved by the caller.
    pub fn create_entry(
        &self,
        image_uri: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
    ) -> JournalResult<TravelEntry> {
        self.create_entry_with(
            EntryId::generate(),
            Utc::now(),
            image_uri,
            address,
            latitude,
            longitude,
        )
    }

    /// Create an entry with caller-supplied identity and creation time.
    pub fn create_entry_with(
        &self,
        id: EntryId,
        created_at: DateTime<Utc>,
        image_uri: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
    ) -> JournalResult<TravelEntry> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        TravelEntry::new(
            id,
            image_uri.trim(),
            address.trim(),
            Some(coordinates),
            Some(created_at),
        )
    }
}
