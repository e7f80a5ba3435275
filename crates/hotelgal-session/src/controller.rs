//! Gallery controller.
//!
//! Sole owner and writer of the session's mutable state: the hotel roster,
//! the per-hotel image cache, the selection state machine, and the pending
//! delete confirmation. Reacts to operator events (selection change, file
//! pick, delete intent) by consulting the upload gate and the remote
//! service, and publishes a fresh immutable [`GallerySnapshot`] on a watch
//! channel after every mutation so any rendering layer can subscribe
//! without coupling the core logic to a UI framework.

use std::sync::Arc;

use tokio::sync::watch;

use hotelgal_core::constants::MAX_NEW_IMAGES;
use hotelgal_core::{
    filter_batch, BatchVerdict, GalleryError, GalleryService, Hotel, ImageRecord, PendingFile,
    RejectionReason, SelectionState,
};

use crate::entity_cache::HotelRoster;
use crate::image_cache::{ImageCache, LoadTicket};

/// Immutable view of the session state, published after every mutation.
#[derive(Debug, Clone, Default)]
pub struct GallerySnapshot {
    pub hotels: Vec<Hotel>,
    pub selection: SelectionState,
    /// True while any image load is in flight.
    pub loading: bool,
    /// Images to render for the active hotel. `None` when there is nothing
    /// safe to show: no selection, the hotel was never loaded, or a load is
    /// in flight (stale data is hidden until the new response lands).
    /// `Some(vec![])` means loaded-and-empty ("no images yet").
    pub active_images: Option<Vec<ImageRecord>>,
    /// Image id awaiting operator confirmation for deletion, if any.
    pub pending_delete: Option<String>,
}

/// Result of one submission attempt that reached the controller.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The filtered batch was submitted and accepted by the server.
    Uploaded { count: usize },
    /// The gate rejected the whole batch; no network call was made.
    Rejected(RejectionReason),
}

pub struct GalleryController {
    service: Arc<dyn GalleryService>,
    roster: HotelRoster,
    cache: ImageCache,
    selection: SelectionState,
    pending_delete: Option<String>,
    snapshot_tx: watch::Sender<GallerySnapshot>,
}

impl GalleryController {
    pub fn new(service: Arc<dyn GalleryService>) -> (Self, watch::Receiver<GallerySnapshot>) {
        let (snapshot_tx, snapshot_rx) = watch::channel(GallerySnapshot::default());
        let controller = Self {
            service,
            roster: HotelRoster::new(),
            cache: ImageCache::new(),
            selection: SelectionState::default(),
            pending_delete: None,
            snapshot_tx,
        };
        (controller, snapshot_rx)
    }

    pub fn subscribe(&self) -> watch::Receiver<GallerySnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Fetch the hotel list. Invoked once at session start; a repeat call
    /// after success is a no-op. On failure the roster stays empty and the
    /// error is surfaced to the operator; there is no automatic retry.
    pub async fn init(&mut self) -> Result<(), GalleryError> {
        if self.roster.is_loaded() {
            return Ok(());
        }
        match self.service.list_hotels().await {
            Ok(hotels) => {
                tracing::info!(count = hotels.len(), "hotel roster loaded");
                self.roster.populate(hotels);
                self.publish();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load hotel roster");
                self.publish();
                Err(err)
            }
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        self.roster.all()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn images(&self, hotel_id: &str) -> Option<&[ImageRecord]> {
        self.cache.get(hotel_id)
    }

    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    /// Dispatch a selection change without performing the fetch. Collapses
    /// the upload surface, drops any pending delete confirmation, and issues
    /// a load ticket when the new selection needs one. The returned ticket is
    /// resolved via [`complete_load`](Self::complete_load); event-driven
    /// hosts use this pair directly, [`select_hotel`](Self::select_hotel) is
    /// the awaited convenience around it.
    pub fn begin_select(&mut self, hotel_id: &str) -> Option<LoadTicket> {
        self.pending_delete = None;
        let needs_load = self.selection.choose(hotel_id);
        let ticket = needs_load.then(|| self.cache.issue(hotel_id));
        self.publish();
        ticket
    }

    /// Apply the result of an image load issued by
    /// [`begin_select`](Self::begin_select) or a refresh. A failed load
    /// leaves the previous cache entry intact.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<ImageRecord>, GalleryError>,
    ) -> Result<(), GalleryError> {
        let outcome = match result {
            Ok(images) => {
                self.cache.commit(ticket, images);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "image load failed");
                self.cache.abort(ticket);
                Err(err)
            }
        };
        self.publish();
        outcome
    }

    /// Select a hotel and load its images. An empty id clears the selection.
    pub async fn select_hotel(&mut self, hotel_id: &str) -> Result<(), GalleryError> {
        let Some(ticket) = self.begin_select(hotel_id) else {
            return Ok(());
        };
        let result = self.service.list_images(hotel_id).await;
        self.complete_load(ticket, result)
    }

    /// Show the upload surface. A no-op without a selection or when already
    /// expanded.
    pub fn request_expand(&mut self) -> bool {
        let expanded = self.selection.request_expand();
        if expanded {
            self.publish();
        }
        expanded
    }

    /// Re-fetch the active hotel's images; whole-entry replacement on
    /// success. Used after every successful mutation.
    async fn refresh_active(&mut self) -> Result<(), GalleryError> {
        let Some(hotel_id) = self.selection.active_hotel().map(str::to_string) else {
            return Ok(());
        };
        let ticket = self.cache.issue(&hotel_id);
        self.publish();
        let result = self.service.list_images(&hotel_id).await;
        self.complete_load(ticket, result)
    }

    /// Submit the files picked in one file-selection action. The batch runs
    /// through the upload gate first; a rejected batch never touches the
    /// network. On a successful submission the active hotel's cache entry is
    /// re-derived from the server. The batch is consumed either way, which is
    /// what lets the operator re-pick the same files afterwards.
    pub async fn upload_batch(
        &mut self,
        files: Vec<PendingFile>,
    ) -> Result<UploadOutcome, GalleryError> {
        let Some(hotel_id) = self.selection.active_hotel().map(str::to_string) else {
            return Err(GalleryError::NoActiveHotel);
        };

        // A never-loaded entry dedups against nothing.
        let existing = self.cache.get(&hotel_id).unwrap_or(&[]);
        match filter_batch(files, existing, MAX_NEW_IMAGES) {
            BatchVerdict::Rejected(reason) => {
                tracing::debug!(%hotel_id, ?reason, "upload batch rejected pre-flight");
                Ok(UploadOutcome::Rejected(reason))
            }
            BatchVerdict::Accepted(batch) => {
                let count = batch.len();
                self.service.upload_images(&hotel_id, batch).await?;
                tracing::info!(%hotel_id, count, "image batch uploaded");
                if let Err(err) = self.refresh_active().await {
                    tracing::warn!(error = %err, "post-upload refresh failed");
                }
                Ok(UploadOutcome::Uploaded { count })
            }
        }
    }

    /// Arm a delete confirmation for one image of the active hotel. Returns
    /// false when the image is not in the active hotel's cached list. The
    /// delete itself only happens on [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, image_id: &str) -> bool {
        let known = self
            .selection
            .active_hotel()
            .and_then(|hotel_id| self.cache.get(hotel_id))
            .is_some_and(|images| images.iter().any(|img| img.id == image_id));
        if !known {
            return false;
        }
        self.pending_delete = Some(image_id.to_string());
        self.publish();
        true
    }

    /// Dismiss a pending delete confirmation.
    pub fn cancel_delete(&mut self, image_id: &str) {
        if self.pending_delete.as_deref() == Some(image_id) {
            self.pending_delete = None;
            self.publish();
        }
    }

    /// Carry out a previously requested delete. Returns Ok(false) when no
    /// matching confirmation is pending (stale or mismatched confirm). On
    /// success the active hotel's cache entry is re-derived from the server.
    pub async fn confirm_delete(&mut self, image_id: &str) -> Result<bool, GalleryError> {
        if self.pending_delete.as_deref() != Some(image_id) {
            return Ok(false);
        }
        self.pending_delete = None;

        if let Err(err) = self.service.delete_image(image_id).await {
            self.publish();
            return Err(err);
        }
        tracing::info!(image_id, "image deleted");
        if let Err(err) = self.refresh_active().await {
            tracing::warn!(error = %err, "post-delete refresh failed");
        }
        Ok(true)
    }

    fn snapshot(&self) -> GallerySnapshot {
        let active_images = if self.cache.is_loading() {
            None
        } else {
            self.selection
                .active_hotel()
                .and_then(|hotel_id| self.cache.get(hotel_id))
                .map(<[ImageRecord]>::to_vec)
        };
        GallerySnapshot {
            hotels: self.roster.all().to_vec(),
            selection: self.selection.clone(),
            loading: self.cache.is_loading(),
            active_images,
            pending_delete: self.pending_delete.clone(),
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.snapshot());
    }
}
