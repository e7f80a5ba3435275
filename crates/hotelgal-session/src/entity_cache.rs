//! Hotel roster: the one-shot entity cache.
//!
//! Fetched once at session start and read-only afterwards. A failed startup
//! fetch leaves the roster empty and unloaded; there is no automatic retry.

use hotelgal_core::Hotel;

#[derive(Debug, Default)]
pub struct HotelRoster {
    hotels: Vec<Hotel>,
    loaded: bool,
}

impl HotelRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the startup fetch has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Install the fetched hotel list. Called at most once per session.
    pub fn populate(&mut self, hotels: Vec<Hotel>) {
        self.hotels = hotels;
        self.loaded = true;
    }

    pub fn all(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn get(&self, hotel_id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| hotel.id == hotel_id)
    }

    pub fn contains(&self, hotel_id: &str) -> bool {
        self.get(hotel_id).is_some()
    }
}
