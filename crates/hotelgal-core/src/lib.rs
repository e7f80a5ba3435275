//! Hotelgal Core Library
//!
//! This crate provides the domain models, error types, upload gate, and
//! selection state machine shared across all hotelgal components, plus the
//! `GalleryService` trait that abstracts the remote gallery API.

pub mod constants;
pub mod error;
pub mod models;
pub mod selection;
pub mod service;
pub mod upload_gate;

// Re-export commonly used types
pub use error::GalleryError;
pub use models::{Hotel, ImageRecord, PendingFile};
pub use selection::SelectionState;
pub use service::GalleryService;
pub use upload_gate::{filter_batch, BatchVerdict, RejectionReason};
