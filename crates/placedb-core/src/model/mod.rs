// crates/placedb-core/src/model/mod.rs
pub mod place;

pub use place::{Coordinates, Place, PlaceKind};
