//! Per-hotel image cache with request sequencing.
//!
//! Maps hotel id to the ordered image list from the last successful fetch.
//! A key is present iff a fetch for that hotel has completed at least once;
//! absence means "not yet loaded", which is distinct from "loaded and empty".
//! Entries are whole-list replacements, never incremental patches.
//!
//! Every issued load carries a monotonically increasing sequence number, and
//! the cache remembers the newest sequence issued per hotel. A completion is
//! committed only if it belongs to that newest issue, so when two loads for
//! the same hotel overlap, the last-issued request wins regardless of which
//! response lands first. A late response for a different hotel still
//! populates that hotel's slot.

use std::collections::HashMap;

use hotelgal_core::ImageRecord;

/// Handle for one in-flight image load. Returned by [`ImageCache::issue`]
/// and consumed by [`ImageCache::commit`] or [`ImageCache::abort`].
#[derive(Debug)]
pub struct LoadTicket {
    hotel_id: String,
    seq: u64,
}

impl LoadTicket {
    pub fn hotel_id(&self) -> &str {
        &self.hotel_id
    }
}

#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, Vec<ImageRecord>>,
    newest_issued: HashMap<String, u64>,
    next_seq: u64,
    in_flight: usize,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new load for `hotel_id`. Supersedes any load already in
    /// flight for the same hotel.
    pub fn issue(&mut self, hotel_id: &str) -> LoadTicket {
        self.next_seq += 1;
        self.newest_issued
            .insert(hotel_id.to_string(), self.next_seq);
        self.in_flight += 1;
        LoadTicket {
            hotel_id: hotel_id.to_string(),
            seq: self.next_seq,
        }
    }

    /// Apply a completed load. Replaces the whole entry for the ticket's
    /// hotel, unless a newer load for that hotel was issued meanwhile, in
    /// which case the stale response is dropped. Returns whether the entry
    /// was replaced.
    pub fn commit(&mut self, ticket: LoadTicket, images: Vec<ImageRecord>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let newest = self.newest_issued.get(ticket.hotel_id()).copied();
        if newest != Some(ticket.seq) {
            tracing::debug!(
                hotel_id = ticket.hotel_id(),
                "dropping stale image list response"
            );
            return false;
        }
        self.entries.insert(ticket.hotel_id, images);
        true
    }

    /// Record a failed load. The entry keeps its previous value.
    pub fn abort(&mut self, _ticket: LoadTicket) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// The cached list for a hotel. `None` means no fetch has ever completed
    /// for it; `Some(&[])` means the last fetch returned no images.
    pub fn get(&self, hotel_id: &str) -> Option<&[ImageRecord]> {
        self.entries.get(hotel_id).map(Vec::as_slice)
    }

    pub fn is_loaded(&self, hotel_id: &str) -> bool {
        self.entries.contains_key(hotel_id)
    }

    /// Global loading flag: true while any load, for any hotel, is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<ImageRecord> {
        names
            .iter()
            .map(|name| ImageRecord {
                id: format!("id-{name}"),
                name: name.to_string(),
                url: format!("http://x/{name}"),
            })
            .collect()
    }

    #[test]
    fn absent_key_means_not_loaded() {
        let cache = ImageCache::new();
        assert!(cache.get("h1").is_none());
        assert!(!cache.is_loaded("h1"));
    }

    #[test]
    fn commit_replaces_whole_entry() {
        let mut cache = ImageCache::new();
        let ticket = cache.issue("h1");
        assert!(cache.is_loading());
        assert!(cache.commit(ticket, records(&["a.jpg", "b.jpg"])));
        assert!(!cache.is_loading());

        let ticket = cache.issue("h1");
        assert!(cache.commit(ticket, records(&["c.jpg"])));
        let entry = cache.get("h1").unwrap();
        assert_eq!(entry.len(), 1);
        assert_eq!(entry[0].name, "c.jpg");
    }

    #[test]
    fn loaded_and_empty_is_distinct_from_not_loaded() {
        let mut cache = ImageCache::new();
        let ticket = cache.issue("h1");
        cache.commit(ticket, vec![]);
        assert!(cache.is_loaded("h1"));
        assert_eq!(cache.get("h1"), Some(&[][..]));
        assert!(!cache.is_loaded("h2"));
    }

    #[test]
    fn last_issued_wins_on_out_of_order_completion() {
        let mut cache = ImageCache::new();
        let first = cache.issue("h1");
        let second = cache.issue("h1");

        // Second (newer) request completes first, then the stale one lands.
        assert!(cache.commit(second, records(&["new.jpg"])));
        assert!(!cache.commit(first, records(&["old.jpg"])));

        let entry = cache.get("h1").unwrap();
        assert_eq!(entry[0].name, "new.jpg");
        assert!(!cache.is_loading());
    }

    #[test]
    fn stale_response_dropped_even_when_it_lands_before_the_newer_one() {
        let mut cache = ImageCache::new();
        let first = cache.issue("h1");
        let second = cache.issue("h1");

        assert!(!cache.commit(first, records(&["old.jpg"])));
        assert!(cache.get("h1").is_none());
        assert!(cache.commit(second, records(&["new.jpg"])));
        assert_eq!(cache.get("h1").unwrap()[0].name, "new.jpg");
    }

    #[test]
    fn late_response_for_another_hotel_still_lands() {
        let mut cache = ImageCache::new();
        let h1_ticket = cache.issue("h1");
        let h2_ticket = cache.issue("h2");

        assert!(cache.commit(h2_ticket, records(&["h2.jpg"])));
        // H1's response arrives after the operator moved on to H2; its slot
        // is still populated.
        assert!(cache.commit(h1_ticket, records(&["h1.jpg"])));
        assert_eq!(cache.get("h1").unwrap()[0].name, "h1.jpg");
        assert_eq!(cache.get("h2").unwrap()[0].name, "h2.jpg");
    }

    #[test]
    fn failed_load_keeps_previous_entry() {
        let mut cache = ImageCache::new();
        let ticket = cache.issue("h1");
        cache.commit(ticket, records(&["a.jpg"]));

        let ticket = cache.issue("h1");
        cache.abort(ticket);
        assert_eq!(cache.get("h1").unwrap()[0].name, "a.jpg");
        assert!(!cache.is_loading());
    }

    #[test]
    fn loading_flag_is_global() {
        let mut cache = ImageCache::new();
        let t1 = cache.issue("h1");
        let t2 = cache.issue("h2");
        assert!(cache.is_loading());
        cache.commit(t1, vec![]);
        assert!(cache.is_loading());
        cache.commit(t2, vec![]);
        assert!(!cache.is_loading());
    }
}
