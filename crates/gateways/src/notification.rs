//! User notification boundary (fire-and-forget).

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// A local notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Platform channel the notification is posted on.
    pub channel_id: String,
}

impl Notification {
    pub const DEFAULT_CHANNEL: &'static str = "travel";

    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            channel_id: Self::DEFAULT_CHANNEL.to_string(),
        }
    }

    /// The confirmation shown after an entry has been saved.
    pub fn entry_saved() -> Self {
        Self::new(
            "New Travel Entry",
            "Your travel entry has been saved successfully!",
        )
    }
}

/// Delivers notifications. Best-effort: callers log failures and move on.
#[async_trait::async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), GatewayError>;
}

/// Notifier that writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl NotificationGateway for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), GatewayError> {
        tracing::info!(
            channel = %notification.channel_id,
            title = %notification.title,
            body = %notification.body,
            "notification"
        );
        Ok(())
    }
}
