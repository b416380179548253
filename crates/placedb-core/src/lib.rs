// crates/placedb-core/src/lib.rs

//! # placedb-core
//!
//! In-memory autocomplete over a static list of places (cities, states,
//! countries). The index is built once from the dataset and is read-only
//! afterwards; queries are pure lookups that can run from any number of
//! threads at once.
//!
//! ```rust
//! use placedb_core::{PlaceIndex, PlaceSearch};
//!
//! let index = PlaceIndex::embedded()?;
//! let hits = index.search("bangk");
//! assert!(hits.len() <= 10);
//! # Ok::<(), placedb_core::PlaceError>(())
//! ```

pub mod common;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
mod search; // impl PlaceSearch for PlaceIndex
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::IndexStats;
pub use crate::error::{PlaceError, Result};
pub use crate::index::{IndexOptions, PlaceIndex};
pub use crate::model::{Coordinates, Place, PlaceKind};
pub use crate::traits::PlaceSearch;
