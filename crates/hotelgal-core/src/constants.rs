//! Shared constants for client-side upload rules.

/// Maximum number of new (non-duplicate) images accepted in one submission.
pub const MAX_NEW_IMAGES: usize = 20;

/// Advisory per-image size ceiling in bytes. Documented to the operator;
/// enforcement is the server's responsibility, not the upload gate's.
pub const ADVISORY_MAX_IMAGE_BYTES: usize = 500 * 1024;
