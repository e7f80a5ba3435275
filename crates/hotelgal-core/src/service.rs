//! Remote gallery service trait.
//!
//! Seam between the session layer and the transport. The HTTP client
//! implements it for production; tests inject scripted fakes.

use async_trait::async_trait;

use crate::error::GalleryError;
use crate::models::{Hotel, ImageRecord, PendingFile};

/// The remote gallery API, as seen by the session layer.
///
/// All methods map 1:1 to remote operations; failures come back as the
/// matching [`GalleryError`] variant. Implementations perform no caching —
/// every call reflects current server truth.
#[async_trait]
pub trait GalleryService: Send + Sync {
    /// List all hotels.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, GalleryError>;

    /// List the images owned by one hotel, in server order.
    async fn list_images(&self, hotel_id: &str) -> Result<Vec<ImageRecord>, GalleryError>;

    /// Upload a batch of files for one hotel. The batch must already have
    /// passed the upload gate.
    async fn upload_images(
        &self,
        hotel_id: &str,
        files: Vec<PendingFile>,
    ) -> Result<(), GalleryError>;

    /// Delete one image by its server-assigned id.
    async fn delete_image(&self, image_id: &str) -> Result<(), GalleryError>;
}
