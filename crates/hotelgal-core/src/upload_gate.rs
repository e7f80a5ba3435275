//! Upload gate: pre-flight batch filtering.
//!
//! Pure decision logic run before any network call. Given the files the
//! operator picked and the images already known for the active hotel, it
//! drops duplicates (by filename only, not content) and rejects the whole
//! submission when nothing new remains or when too many new files remain.
//! No I/O, no side effects; same inputs always yield the same verdict.

use std::collections::HashSet;

use crate::models::{ImageRecord, PendingFile};

/// Why a whole batch was rejected without any network attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Every candidate file's name already exists for the active hotel.
    AllDuplicates,
    /// More than the allowed number of new files remain after dedup. No
    /// partial submission is attempted; the operator must resubmit fewer.
    BatchTooLarge,
}

/// Outcome of pre-flight filtering: either a duplicate-free batch to submit,
/// or a rejection of the whole submission.
#[derive(Debug)]
pub enum BatchVerdict {
    Accepted(Vec<PendingFile>),
    Rejected(RejectionReason),
}

impl BatchVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BatchVerdict::Accepted(_))
    }
}

/// Filter a candidate batch against the images already present for a hotel.
///
/// Files whose `name` matches an existing image name are dropped. An empty
/// result rejects with [`RejectionReason::AllDuplicates`]; more than
/// `max_new` survivors reject with [`RejectionReason::BatchTooLarge`].
pub fn filter_batch(
    candidates: Vec<PendingFile>,
    existing: &[ImageRecord],
    max_new: usize,
) -> BatchVerdict {
    let existing_names: HashSet<&str> = existing.iter().map(|img| img.name.as_str()).collect();

    let new_files: Vec<PendingFile> = candidates
        .into_iter()
        .filter(|file| !existing_names.contains(file.name.as_str()))
        .collect();

    if new_files.is_empty() {
        return BatchVerdict::Rejected(RejectionReason::AllDuplicates);
    }

    if new_files.len() > max_new {
        return BatchVerdict::Rejected(RejectionReason::BatchTooLarge);
    }

    BatchVerdict::Accepted(new_files)
}
