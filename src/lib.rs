//! placedb-rs
//!
//! Umbrella crate for the workspace: re-exports [`placedb_core`] so the demos
//! under `demos/` can be run from the repository root
//! (`cargo run --example autocomplete`).

pub use placedb_core::*;
