//! External collaborator boundaries: capture, location, geocoding, permissions,
//! notifications.
//!
//! The journal core calls these but never implements a platform provider. Each
//! module ships the contract plus a small local adapter usable from the CLI and
//! tests.

pub mod capture;
pub mod error;
pub mod geocoding;
pub mod location;
pub mod notification;
pub mod permissions;

pub use capture::{CaptureGateway, CaptureOptions, CaptureOutcome, MediaType, StaticCapture};
pub use error::GatewayError;
pub use geocoding::{GeocodingGateway, ManualGeocoder, Placemark};
pub use location::{FixedLocation, LocationGateway, LocationRequest};
pub use notification::{LogNotifier, Notification, NotificationGateway};
pub use permissions::{GrantAllPermissions, Permission, PermissionGateway, PermissionStatus};
