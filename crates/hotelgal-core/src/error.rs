//! Error types module
//!
//! Transport and server failures surfaced by the remote gallery service, one
//! variant per remote operation. Locally-detected pre-flight rejections
//! (duplicates, oversized batches) are not errors; they are verdicts from the
//! upload gate and never reach this taxonomy.

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("Failed to fetch hotels: {0}")]
    EntityList(String),

    #[error("Failed to fetch images for hotel {hotel_id}: {message}")]
    ImageList { hotel_id: String, message: String },

    #[error("Upload failed for hotel {hotel_id}: {message}")]
    Upload { hotel_id: String, message: String },

    #[error("Failed to delete image {image_id}: {message}")]
    Delete { image_id: String, message: String },

    /// Client-side misuse guard: an upload or delete was attempted with no
    /// active hotel. The upload surface is hidden in that state, so this only
    /// fires when a caller bypasses the selection machine.
    #[error("No hotel selected")]
    NoActiveHotel,
}

impl GalleryError {
    /// Get the error type name for operator-facing summaries
    pub fn error_type(&self) -> &'static str {
        match self {
            GalleryError::EntityList(_) => "EntityList",
            GalleryError::ImageList { .. } => "ImageList",
            GalleryError::Upload { .. } => "Upload",
            GalleryError::Delete { .. } => "Delete",
            GalleryError::NoActiveHotel => "NoActiveHotel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_type_names() {
        let err = GalleryError::ImageList {
            hotel_id: "h1".to_string(),
            message: "503".to_string(),
        };
        assert_eq!(err.error_type(), "ImageList");
        assert!(err.to_string().contains("h1"));

        assert_eq!(
            GalleryError::EntityList("timeout".to_string()).error_type(),
            "EntityList"
        );
    }
}
