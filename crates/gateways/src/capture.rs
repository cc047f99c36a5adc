//! Photo capture boundary.

use crate::error::GatewayError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaType {
    Photo,
    Video,
}

/// Camera launch options.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    pub media_type: MediaType,
    /// JPEG quality in `0.0..=1.0`.
    pub quality: f32,
    /// Also keep a copy in the device photo library.
    pub save_to_photos: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            media_type: MediaType::Photo,
            quality: 0.8,
            save_to_photos: true,
        }
    }
}

/// Result of a capture attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A photo was taken; `uri` is opaque to the journal.
    Captured { uri: String },
    /// The user backed out of the camera.
    Cancelled,
}

#[async_trait::async_trait]
pub trait CaptureGateway: Send + Sync {
    async fn capture_photo(&self, options: &CaptureOptions) -> Result<CaptureOutcome, GatewayError>;
}

/// Capture adapter that hands back an already-existing image reference.
///
/// `None` behaves like a user cancelling the camera.
#[derive(Debug, Clone, Default)]
pub struct StaticCapture {
    uri: Option<String>,
}

impl StaticCapture {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self { uri: None }
    }
}

#[async_trait::async_trait]
impl CaptureGateway for StaticCapture {
    async fn capture_photo(&self, options: &CaptureOptions) -> Result<CaptureOutcome, GatewayError> {
        if options.media_type != MediaType::Photo {
            return Err(GatewayError::Capture("only photos can be captured".to_string()));
        }
        match &self.uri {
            Some(uri) if uri.trim().is_empty() => {
                Err(GatewayError::Capture("camera returned no image".to_string()))
            }
            Some(uri) => Ok(CaptureOutcome::Captured { uri: uri.clone() }),
            None => Ok(CaptureOutcome::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_capture_returns_uri() {
        let outcome = StaticCapture::new("file://a.jpg")
            .capture_photo(&CaptureOptions::default())
            .await
            .unwrap();
        assert_eq!(
            outcome,
            CaptureOutcome::Captured {
                uri: "file://a.jpg".to_string()
            }
        );
    }

    #[tokio::test]
    async fn static_capture_can_cancel() {
        let outcome = StaticCapture::cancelled()
            .capture_photo(&CaptureOptions::default())
            .await
            .unwrap();
        assert_eq!(outcome, CaptureOutcome::Cancelled);
    }

    #[tokio::test]
    async fn blank_uri_is_a_failure() {
        let err = StaticCapture::new(" ")
            .capture_photo(&CaptureOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Capture(_)));
    }

    #[test]
    fn default_options_take_photos() {
        let opts = CaptureOptions::default();
        assert_eq!(opts.media_type, MediaType::Photo);
        assert!(opts.save_to_photos);
    }
}
