//! Capture → locate → geocode → persist → notify, for one user action.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use traveljournal_core::{Entity, JournalError};
use traveljournal_entries::{Coordinates, EntryFactory, TravelEntry};
use traveljournal_gateways::{
    CaptureGateway, CaptureOptions, CaptureOutcome, GatewayError, GeocodingGateway,
    LocationGateway, LocationRequest, Notification, NotificationGateway, Permission,
    PermissionGateway, PermissionStatus,
};
use traveljournal_infra::{EntryRepository, KeyValueStore};

/// Why a capture-and-save attempt did not produce an entry.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{permission} permission not granted ({status:?})")]
    PermissionDenied {
        permission: Permission,
        status: PermissionStatus,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Journal(#[from] JournalError),
}

/// The external collaborators one flow talks to.
#[derive(Clone)]
pub struct Gateways {
    pub capture: Arc<dyn CaptureGateway>,
    pub location: Arc<dyn LocationGateway>,
    pub geocoder: Arc<dyn GeocodingGateway>,
    pub permissions: Arc<dyn PermissionGateway>,
    pub notifier: Arc<dyn NotificationGateway>,
}

/// Staged inputs of an entry that has not been saved yet.
///
/// A front end fills this as results arrive (photo first, then position, then
/// address) and hands it to [`CaptureFlow::save`] once complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub image_uri: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
}

impl EntryDraft {
    pub fn is_complete(&self) -> bool {
        self.image_uri.is_some() && self.coordinates.is_some() && self.address.is_some()
    }
}

/// Drives one capture-and-save action against an injected repository.
///
/// Every step awaits the previous one. Nothing is retried; a failure at any step
/// leaves the persisted collection untouched.
pub struct CaptureFlow<S> {
    repository: Arc<EntryRepository<S>>,
    gateways: Gateways,
    factory: EntryFactory,
    capture_options: CaptureOptions,
    location_request: LocationRequest,
}

impl<S> CaptureFlow<S>
where
    S: KeyValueStore,
{
    pub fn new(repository: Arc<EntryRepository<S>>, gateways: Gateways) -> Self {
        Self {
            repository,
            gateways,
            factory: EntryFactory::new(),
            capture_options: CaptureOptions::default(),
            location_request: LocationRequest::default(),
        }
    }

    pub fn with_capture_options(mut self, options: CaptureOptions) -> Self {
        self.capture_options = options;
        self
    }

    pub fn with_location_request(mut self, request: LocationRequest) -> Self {
        self.location_request = request;
        self
    }

    pub fn repository(&self) -> &Arc<EntryRepository<S>> {
        &self.repository
    }

    /// Take a photo and resolve where it was taken.
    ///
    /// Returns `Ok(None)` when the user cancels the camera.
    #[instrument(skip(self), err)]
    pub async fn capture(&self) -> Result<Option<EntryDraft>, FlowError> {
        self.ensure_permission(Permission::Camera).await?;
        self.ensure_permission(Permission::Location).await?;

        let image_uri = match self
            .gateways
            .capture
            .capture_photo(&self.capture_options)
            .await?
        {
            CaptureOutcome::Captured { uri } => uri,
            CaptureOutcome::Cancelled => {
                debug!("capture cancelled by user");
                return Ok(None);
            }
        };

        let coordinates = self
            .gateways
            .location
            .current_coordinates(&self.location_request)
            .await?;

        let address = self.gateways.geocoder.resolve_address(coordinates).await?;
        debug!(%coordinates, %address, "resolved capture location");

        Ok(Some(EntryDraft {
            image_uri: Some(image_uri),
            coordinates: Some(coordinates),
            address: Some(address),
        }))
    }

    /// Build an entry from a complete draft, persist it, then notify the user.
    #[instrument(skip(self, draft), err)]
    pub async fn save(&self, draft: &EntryDraft) -> Result<TravelEntry, FlowError> {
        let (Some(image_uri), Some(coordinates), Some(address)) =
            (&draft.image_uri, draft.coordinates, &draft.address)
        else {
            return Err(JournalError::invalid_input("take a picture before saving").into());
        };

        let entry = self.factory.create_entry(
            image_uri,
            address,
            coordinates.latitude(),
            coordinates.longitude(),
        )?;

        self.repository.append(entry.clone()).await?;
        info!(entry_id = %entry.id(), "travel entry saved");

        self.notify_saved().await;
        Ok(entry)
    }

    /// Run the whole action; `Ok(None)` means the user cancelled.
    pub async fn capture_and_save(&self) -> Result<Option<TravelEntry>, FlowError> {
        match self.capture().await? {
            Some(draft) => self.save(&draft).await.map(Some),
            None => Ok(None),
        }
    }

    async fn ensure_permission(&self, permission: Permission) -> Result<(), FlowError> {
        let mut status = self.gateways.permissions.check(permission).await?;
        if !status.is_granted() {
            status = self.gateways.permissions.request(permission).await?;
        }

        if status.is_granted() {
            Ok(())
        } else {
            Err(FlowError::PermissionDenied { permission, status })
        }
    }

    /// Best effort; the entry is already saved whatever happens here.
    ///
    /// Permission is requested when missing, but the notification is always
    /// attempted; a platform without the permission drops it.
    async fn notify_saved(&self) {
        let permissions = &self.gateways.permissions;
        let status = match permissions.check(Permission::Notifications).await {
            Ok(status) if status.is_granted() => Ok(status),
            _ => permissions.request(Permission::Notifications).await,
        };
        match status {
            Ok(status) if !status.is_granted() => {
                debug!(?status, "notification permission not granted");
            }
            Err(err) => debug!(error = %err, "notification permission request failed"),
            Ok(_) => {}
        }

        if let Err(err) = self
            .gateways
            .notifier
            .notify(&Notification::entry_saved())
            .await
        {
            warn!(error = %err, "failed to send save notification");
        }
    }
}
