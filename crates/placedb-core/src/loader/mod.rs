// crates/placedb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! JSON parser. Every entry point either returns a fully built
//! [`PlaceIndex`] or an error; there is no partially loaded state.

use crate::error::Result;
use crate::index::{IndexOptions, PlaceIndex};
use crate::model::Place;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod common_io;
mod json;

/// Dataset compiled into the crate.
static EMBEDDED_DATASET: &[u8] = include_bytes!("../../data/places.json");

// Single in-process instance so the embedded dataset is parsed once.
static EMBEDDED_INDEX: OnceCell<PlaceIndex> = OnceCell::new();

/// Parses a JSON array of place records, preserving source order.
pub fn load_from_slice(bytes: &[u8]) -> Result<Vec<Place>> {
    json::parse_slice(bytes)
}

/// Streaming variant of [`load_from_slice`].
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Place>> {
    json::parse_reader(reader)
}

/// Reads place records from a file. `.gz` files are decompressed when the
/// `compact` feature is enabled.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Place>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    load_from_reader(reader)
}

impl PlaceIndex {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "places.json"
    }

    /// The index over the embedded dataset, built on first use.
    ///
    /// Later calls return the same instance; a parse failure is returned to
    /// every caller and nothing is cached.
    pub fn embedded() -> Result<&'static PlaceIndex> {
        EMBEDDED_INDEX.get_or_try_init(|| Self::from_slice(EMBEDDED_DATASET, IndexOptions::default()))
    }

    /// Loads a dataset file and builds the index over it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_path_with_options(path, IndexOptions::default())
    }

    pub fn load_from_path_with_options(path: impl AsRef<Path>, options: IndexOptions) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();
        let places = load_from_path(path)?;
        let index = Self::build_with_options(places, options);
        log::info!(
            "loaded {} places from {} in {:?}",
            index.count(),
            path.display(),
            started.elapsed()
        );
        Ok(index)
    }

    /// Parses `bytes` as a dataset and builds the index over it.
    pub fn from_slice(bytes: &[u8], options: IndexOptions) -> Result<Self> {
        let started = Instant::now();
        let places = load_from_slice(bytes)?;
        let index = Self::build_with_options(places, options);
        log::info!(
            "loaded {} places in {:?}",
            index.count(),
            started.elapsed()
        );
        Ok(index)
    }
}
