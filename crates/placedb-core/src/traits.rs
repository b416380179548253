// crates/placedb-core/src/traits.rs
use crate::common::IndexStats;
use crate::model::Place;

/// The query surface handed to front ends (HTTP handlers, CLI, bindings).
///
/// Every method is a pure read over already-resident memory: no locks, no
/// I/O, no error path. Implementors must be shareable across threads.
///
/// # Example
///
/// ```rust
/// use placedb_core::{PlaceIndex, PlaceSearch};
///
/// let index = PlaceIndex::embedded().unwrap();
///
/// for place in index.search("bangk") {
///     println!("{} ({})", place.name(), place.country);
/// }
/// assert!(index.get_by_id("does-not-exist").is_none());
/// ```
pub trait PlaceSearch: Send + Sync {
    /// Autocomplete lookup: at most `max_results` places, deterministic for a
    /// fixed dataset and query. Blank input yields an empty result.
    fn search(&self, query: &str) -> Vec<&Place>;

    /// Looks up a record by its public id.
    fn get_by_id(&self, id: &str) -> Option<&Place>;

    /// Number of loaded records.
    fn count(&self) -> usize;

    fn stats(&self) -> IndexStats;
}
