use thiserror::Error;

/// Failure reported by an external collaborator.
///
/// The journal never retries these; surfacing them is the caller's job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("camera failed: {0}")]
    Capture(String),

    #[error("location unavailable: {0}")]
    Location(String),

    #[error("reverse geocoding failed: {0}")]
    Geocoding(String),

    #[error("permission check failed: {0}")]
    Permission(String),

    #[error("notification failed: {0}")]
    Notification(String),
}
