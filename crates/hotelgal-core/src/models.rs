use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Parent entity that owns a gallery of images. Fetched once at startup and
/// treated as read-only reference data for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// The backend is Mongo-shaped and sends `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

/// One uploaded image's server-side metadata and fetchable location.
///
/// `id` is server-assigned and globally unique. `name` is the original
/// filename and is what deduplication keys on; it is not guaranteed unique
/// across hotels. Records are never mutated in place — any change is
/// represented by refetching the full list for the owning hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub url: String,
}

/// One file picked by the operator for upload. Ephemeral: lives only for the
/// duration of a single submission attempt and is consumed by it.
#[derive(Debug, Clone)]
pub struct PendingFile {
    pub name: String,
    pub bytes: Bytes,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}
