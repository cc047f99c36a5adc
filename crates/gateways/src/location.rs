//! Device position boundary.

use std::time::Duration;

use traveljournal_entries::Coordinates;

use crate::error::GatewayError;

/// Position fix parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRequest {
    pub high_accuracy: bool,
    /// Give up if no fix arrives within this window.
    pub timeout: Duration,
    /// Accept a cached fix no older than this.
    pub maximum_age: Duration,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(15),
            maximum_age: Duration::from_secs(10),
        }
    }
}

#[async_trait::async_trait]
pub trait LocationGateway: Send + Sync {
    async fn current_coordinates(&self, request: &LocationRequest) -> Result<Coordinates, GatewayError>;
}

/// Location adapter that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coordinates: Coordinates,
}

impl FixedLocation {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait::async_trait]
impl LocationGateway for FixedLocation {
    async fn current_coordinates(&self, _request: &LocationRequest) -> Result<Coordinates, GatewayError> {
        Ok(self.coordinates)
    }
}
