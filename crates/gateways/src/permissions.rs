//! Runtime permission boundary.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Capabilities the capture flow needs the user to grant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Camera,
    Location,
    Notifications,
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Permission::Camera => "camera",
            Permission::Location => "location",
            Permission::Notifications => "notifications",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Denied permanently; asking again will not show a prompt.
    Blocked,
    /// Not available on this device.
    Unavailable,
    /// Granted with restrictions (e.g. a subset of photos).
    Limited,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

#[async_trait::async_trait]
pub trait PermissionGateway: Send + Sync {
    /// Current status without prompting the user.
    async fn check(&self, permission: Permission) -> Result<PermissionStatus, GatewayError>;

    /// Prompt the user if the platform allows it, returning the resulting status.
    async fn request(&self, permission: Permission) -> Result<PermissionStatus, GatewayError>;
}

/// Permission adapter for environments without runtime prompts (CLI, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantAllPermissions;

#[async_trait::async_trait]
impl PermissionGateway for GrantAllPermissions {
    async fn check(&self, _permission: Permission) -> Result<PermissionStatus, GatewayError> {
        Ok(PermissionStatus::Granted)
    }

    async fn request(&self, _permission: Permission) -> Result<PermissionStatus, GatewayError> {
        Ok(PermissionStatus::Granted)
    }
}
