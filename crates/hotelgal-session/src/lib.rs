//! Hotelgal session layer.
//!
//! Owns the client-side state for one operator session: the read-only hotel
//! roster, the per-hotel image cache with request sequencing, and the
//! controller that orchestrates loads, uploads, and deletes against a
//! [`hotelgal_core::GalleryService`], publishing an immutable snapshot after
//! every mutation.

pub mod controller;
pub mod entity_cache;
pub mod image_cache;

pub use controller::{GalleryController, GallerySnapshot, UploadOutcome};
pub use entity_cache::HotelRoster;
pub use image_cache::{ImageCache, LoadTicket};
