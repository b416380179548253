// crates/placedb-core/src/index/mod.rs

//! # Prefix Index
//!
//! The read-only structure behind autocomplete. A [`PlaceIndex`] owns the
//! place records and a map from lowercase name prefixes to record positions.
//! It is only ever produced fully built, and exposes `&self` accessors only,
//! so it can be shared across threads as `Arc<PlaceIndex>` or
//! `&'static PlaceIndex` without locking.

use crate::common::IndexStats;
use crate::model::{Place, PlaceKind};
use std::collections::HashMap;

mod builder;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Tunables for index construction and querying.
///
/// The defaults are the production values; changing them changes which
/// prefixes are indexed and which typos are tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Longest prefix (in characters) stored per name.
    pub max_prefix_len: usize,
    /// Maximum number of places returned by a search.
    pub max_results: usize,
    /// Largest edit distance accepted by the fuzzy fallback.
    pub max_typos: usize,
    /// How many trailing characters the fuzzy fallback strips, at most, when
    /// generating candidates.
    pub max_trimmed_chars: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            max_prefix_len: 20,
            max_results: 10,
            max_typos: 2,
            max_trimmed_chars: 2,
        }
    }
}

// -----------------------------------------------------------------------------
// THE INDEX
// -----------------------------------------------------------------------------

/// Position of a record in [`PlaceIndex::places`]. Never leaves the crate.
pub(crate) type Position = usize;

#[derive(Debug, Clone)]
pub struct PlaceIndex {
    pub(crate) places: Vec<Place>,
    /// lowercase prefix -> positions, in dataset order, duplicates kept.
    pub(crate) prefixes: HashMap<String, Vec<Position>>,
    pub(crate) by_id: HashMap<String, Position>,
    pub(crate) options: IndexOptions,
}

impl PlaceIndex {
    /// Builds the index over `places` with default options.
    pub fn build(places: Vec<Place>) -> Self {
        Self::build_with_options(places, IndexOptions::default())
    }

    /// Builds the index over `places`.
    pub fn build_with_options(places: Vec<Place>, options: IndexOptions) -> Self {
        builder::build(places, options)
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// All records, in dataset order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of loaded records.
    #[inline]
    pub fn count(&self) -> usize {
        self.places.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            prefixes: self.prefixes.len(),
            ..IndexStats::default()
        };
        for p in &self.places {
            match p.kind {
                PlaceKind::City => stats.cities += 1,
                PlaceKind::State => stats.states += 1,
                PlaceKind::Country => stats.countries += 1,
            }
        }
        stats
    }

    /// Raw bucket for a prefix key. Empty for unknown keys.
    pub(crate) fn bucket(&self, key: &str) -> &[Position] {
        self.prefixes.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
