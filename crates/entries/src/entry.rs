use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use traveljournal_core::{Entity, EntryId, JournalError, JournalResult, ValueObject};

/// Geographic position where a photo was taken.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> JournalResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(JournalError::invalid_input(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(JournalError::invalid_input(format!(
                "longitude out of range: {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl ValueObject for Coordinates {}

impl core::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// One persisted journal record: photo reference, resolved address, position and time.
///
/// Entries are immutable once built. The serialized shape is
/// `{ id, imageUri, address, latitude?, longitude?, createdAt? }`; the optional
/// fields are absent on records written by older app revisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEntry {
    id: EntryId,
    image_uri: String,
    address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl TravelEntry {
    /// Build an entry from explicit parts, enforcing the required-field invariants.
    ///
    /// New entries should normally come from [`crate::EntryFactory`]; this is the
    /// path for fixtures and imports where identity and time are already known.
    pub fn new(
        id: EntryId,
        image_uri: impl Into<String>,
        address: impl Into<String>,
        coordinates: Option<Coordinates>,
        created_at: Option<DateTime<Utc>>,
    ) -> JournalResult<Self> {
        let entry = Self {
            id,
            image_uri: image_uri.into(),
            address: address.into(),
            latitude: coordinates.map(|c| c.latitude()),
            longitude: coordinates.map(|c| c.longitude()),
            created_at,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the invariants every persisted entry must satisfy.
    ///
    /// Deserialized records bypass [`TravelEntry::new`], so storage code calls this
    /// before writing anything back.
    pub fn validate(&self) -> JournalResult<()> {
        if self.id.is_blank() {
            return Err(JournalError::invalid_input("id cannot be empty"));
        }
        if self.image_uri.trim().is_empty() {
            return Err(JournalError::invalid_input("imageUri cannot be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(JournalError::invalid_input("address cannot be empty"));
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon).map(|_| ()),
            (None, None) => Ok(()),
            _ => Err(JournalError::invalid_input(
                "latitude and longitude must be given together",
            )),
        }
    }

    pub fn entry_id(&self) -> &EntryId {
        &self.id
    }

    pub fn image_uri(&self) -> &str {
        &self.image_uri
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Entity for TravelEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
