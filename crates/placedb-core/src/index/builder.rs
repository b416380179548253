// crates/placedb-core/src/index/builder.rs
use super::{IndexOptions, PlaceIndex, Position};
use crate::model::Place;
use crate::text::prefixes;
use std::collections::HashMap;

/// **Standard Builder:** Places -> PlaceIndex.
///
/// Every name of every place (primary first, then alternates) contributes
/// its lowercase prefixes up to `max_prefix_len` characters. Positions are
/// appended in dataset order and are not deduplicated here; a place whose
/// names share a prefix lands in that bucket more than once.
pub(super) fn build(places: Vec<Place>, options: IndexOptions) -> PlaceIndex {
    let mut prefix_map: HashMap<String, Vec<Position>> = HashMap::new();
    let mut by_id: HashMap<String, Position> = HashMap::with_capacity(places.len());

    for (pos, place) in places.iter().enumerate() {
        for name in place.all_names() {
            let lower = name.to_lowercase();
            for prefix in prefixes(&lower, options.max_prefix_len) {
                prefix_map.entry(prefix.to_owned()).or_default().push(pos);
            }
        }
        // First occurrence wins, matching a front-to-back scan.
        by_id.entry(place.id.clone()).or_insert(pos);
    }

    log::debug!(
        "built prefix index: {} places, {} prefixes",
        places.len(),
        prefix_map.len()
    );

    PlaceIndex {
        places,
        prefixes: prefix_map,
        by_id,
        options,
    }
}
