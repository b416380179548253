//! Simple aggregate statistics for the index.
//!
//! Returned by [`PlaceIndex::stats`](crate::PlaceIndex::stats); counts reflect
//! the records the index was built from.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
    /// Distinct prefix keys in the index.
    pub prefixes: usize,
}

impl IndexStats {
    pub fn places(&self) -> usize {
        self.countries + self.states + self.cities
    }
}
