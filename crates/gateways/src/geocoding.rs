//! Reverse geocoding boundary.

use serde::{Deserialize, Serialize};
use traveljournal_entries::Coordinates;

use crate::error::GatewayError;

/// Structured reverse-geocoding result as providers typically return it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placemark {
    pub name: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}

impl Placemark {
    /// Format as `"name, city, region"`, skipping blank parts.
    ///
    /// Returns `None` when every part is missing.
    pub fn to_address(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.name, &self.city, &self.region]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Resolves coordinates to a human-readable address.
#[async_trait::async_trait]
pub trait GeocodingGateway: Send + Sync {
    async fn resolve_address(&self, coordinates: Coordinates) -> Result<String, GatewayError>;
}

/// Geocoder that returns an address the user typed in.
#[derive(Debug, Clone)]
pub struct ManualGeocoder {
    placemark: Placemark,
}

impl ManualGeocoder {
    pub fn new(address: impl Into<String>) -> Self {
        Self::from_placemark(Placemark {
            name: Some(address.into()),
            ..Placemark::default()
        })
    }

    pub fn from_placemark(placemark: Placemark) -> Self {
        Self { placemark }
    }
}

#[async_trait::async_trait]
impl GeocodingGateway for ManualGeocoder {
    async fn resolve_address(&self, coordinates: Coordinates) -> Result<String, GatewayError> {
        self.placemark.to_address().ok_or_else(|| {
            GatewayError::Geocoding(format!("no address known for {coordinates}"))
        })
    }
}
