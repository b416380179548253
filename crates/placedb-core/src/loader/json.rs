// crates/placedb-core/src/loader/json.rs
use crate::error::{PlaceError, Result};
use crate::model::Place;
use std::collections::HashSet;
use std::io::Read;

/// Parses a JSON array of place records and validates it.
pub(super) fn parse_reader<R: Read>(reader: R) -> Result<Vec<Place>> {
    let places: Vec<Place> = serde_json::from_reader(reader)?;
    validate(&places)?;
    Ok(places)
}

pub(super) fn parse_slice(bytes: &[u8]) -> Result<Vec<Place>> {
    let places: Vec<Place> = serde_json::from_slice(bytes)?;
    validate(&places)?;
    Ok(places)
}

/// Record-level checks the schema parse can't express.
///
/// Any failure rejects the whole dataset; there is no partial load. Repeated
/// ids are accepted (lookups resolve to the first record) and only logged.
fn validate(places: &[Place]) -> Result<()> {
    let mut ids: HashSet<&str> = HashSet::with_capacity(places.len());

    for (i, p) in places.iter().enumerate() {
        if p.id.is_empty() {
            return Err(PlaceError::InvalidData(format!("record {i}: empty id")));
        }
        if p.name.is_empty() {
            return Err(PlaceError::InvalidData(format!(
                "record {i} ({}): empty name",
                p.id
            )));
        }
        if !ids.insert(p.id.as_str()) {
            log::warn!("record {i}: repeated id {}, lookups return the first", p.id);
        }
    }
    Ok(())
}
