// crates/placedb-core/src/search.rs

//! # Query Engine
//!
//! Two tiers:
//!
//! 1. **Exact path**: the normalized query is used directly as a prefix key.
//!    Hits come back in dataset order, deduplicated, capped.
//! 2. **Fuzzy fallback**: only when the exact path found nothing and the
//!    query has more than one character. Candidates come from the buckets of
//!    the query with its last one or two characters removed; each candidate's
//!    primary name (cut to the query length) must be within `max_typos` edits.
//!    Ranked by distance, then by population, larger first.

use crate::common::IndexStats;
use crate::index::{PlaceIndex, Position};
use crate::model::Place;
use crate::text::{levenshtein, normalize_query, truncate_chars};
use crate::traits::PlaceSearch;
use std::collections::{BTreeSet, HashSet};

impl PlaceIndex {
    fn exact_matches(&self, key: &str) -> Vec<&Place> {
        let limit = self.options.max_results;
        let mut seen: HashSet<Position> = HashSet::new();
        let mut out = Vec::new();

        for &pos in self.bucket(key) {
            if out.len() >= limit {
                break;
            }
            if seen.insert(pos) {
                out.push(&self.places[pos]);
            }
        }
        out
    }

    fn fuzzy_matches(&self, query: &str) -> Vec<&Place> {
        let q_len = query.chars().count();
        if q_len <= 1 {
            return Vec::new();
        }

        // Ordered set: equal-score candidates keep dataset order.
        let mut candidates: BTreeSet<Position> = BTreeSet::new();
        for trimmed in 1..=self.options.max_trimmed_chars {
            if trimmed >= q_len {
                break;
            }
            let key = truncate_chars(query, q_len - trimmed);
            candidates.extend(self.bucket(key).iter().copied());
        }

        let mut scored: Vec<(usize, &Place)> = candidates
            .into_iter()
            .filter_map(|pos| {
                let place = &self.places[pos];
                let name = place.name.to_lowercase();
                let distance = levenshtein(query, truncate_chars(&name, q_len));
                (distance <= self.options.max_typos).then_some((distance, place))
            })
            .collect();

        scored.sort_by(|(da, a), (db, b)| da.cmp(db).then_with(|| b.population.cmp(&a.population)));

        scored
            .into_iter()
            .take(self.options.max_results)
            .map(|(_, place)| place)
            .collect()
    }
}

impl PlaceSearch for PlaceIndex {
    fn search(&self, query: &str) -> Vec<&Place> {
        let q = normalize_query(query);
        if q.is_empty() {
            return Vec::new();
        }

        let exact = self.exact_matches(&q);
        if !exact.is_empty() {
            log::trace!("search {q:?}: {} exact hits", exact.len());
            return exact;
        }

        let fuzzy = self.fuzzy_matches(&q);
        log::trace!("search {q:?}: {} fuzzy hits", fuzzy.len());
        fuzzy
    }

    fn get_by_id(&self, id: &str) -> Option<&Place> {
        self.by_id.get(id).map(|&pos| &self.places[pos])
    }

    fn count(&self) -> usize {
        PlaceIndex::count(self)
    }

    fn stats(&self) -> IndexStats {
        PlaceIndex::stats(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Coordinates, Place, PlaceKind};
    use crate::{IndexOptions, PlaceIndex, PlaceSearch};

    fn city(id: &str, name: &str, population: u64) -> Place {
        city_with(id, name, &[], population)
    }

    fn city_with(id: &str, name: &str, alternates: &[&str], population: u64) -> Place {
        Place {
            id: id.into(),
            kind: PlaceKind::City,
            name: name.into(),
            alternate_names: alternates.iter().map(|s| s.to_string()).collect(),
            country: String::new(),
            country_code: String::new(),
            coordinates: Coordinates::default(),
            population,
        }
    }

    fn ids<'a>(hits: &[&'a Place]) -> Vec<&'a str> {
        hits.iter().map(|p| p.id.as_str()).collect()
    }

    fn bangkok_bangor() -> PlaceIndex {
        PlaceIndex::build(vec![
            city("TH-1", "Bangkok", 5_000_000),
            city("GB-1", "Bangor", 10_000),
        ])
    }

    #[test]
    fn blank_queries_return_nothing() {
        let idx = bangkok_bangor();
        assert!(idx.search("").is_empty());
        assert!(idx.search("   \t\n").is_empty());
    }

    #[test]
    fn exact_path_keeps_dataset_order() {
        let idx = bangkok_bangor();
        assert_eq!(ids(&idx.search("bang")), vec!["TH-1", "GB-1"]);

        // Population never re-ranks exact hits.
        let idx = PlaceIndex::build(vec![
            city("GB-1", "Bangor", 10_000),
            city("TH-1", "Bangkok", 5_000_000),
        ]);
        assert_eq!(ids(&idx.search("bang")), vec!["GB-1", "TH-1"]);
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        let idx = bangkok_bangor();
        assert_eq!(ids(&idx.search("  BANGK ")), vec!["TH-1"]);
    }

    #[test]
    fn unmatched_query_is_empty() {
        let idx = bangkok_bangor();
        assert!(idx.search("zzzqq").is_empty());
    }

    #[test]
    fn single_char_miss_skips_fuzzy() {
        let idx = bangkok_bangor();
        assert!(idx.search("x").is_empty());
    }

    #[test]
    fn trailing_typo_goes_through_fuzzy() {
        let idx = bangkok_bangor();
        // "bangko" + stray 'x': candidates from "bangko" / "bangk".
        assert_eq!(ids(&idx.search("bangkox")), vec!["TH-1"]);
        // Missing 'o': Bangkok at distance 1, Bangor at distance 2.
        assert_eq!(ids(&idx.search("bangkk")), vec!["TH-1", "GB-1"]);
    }

    #[test]
    fn typo_far_from_the_tail_is_not_tolerated() {
        let idx = bangkok_bangor();
        // Only "banko" and "bank" are tried; neither prefixes either name.
        assert!(idx.search("bankok").is_empty());
    }

    #[test]
    fn equal_distance_prefers_larger_population() {
        let idx = PlaceIndex::build(vec![
            city("1", "Springa", 100),
            city("2", "Springb", 9_000),
            city("3", "Springc", 500),
        ]);
        // "springx" is one substitution away from all three.
        assert_eq!(ids(&idx.search("springx")), vec!["2", "3", "1"]);
    }

    #[test]
    fn distance_outranks_population() {
        let idx = PlaceIndex::build(vec![
            city("big", "Portlxyz", 1_000_000),
            city("small", "Portland", 600_000),
        ]);
        // Both sit under "portl". Cut to 7: "portlan" (1), "portlxy" (2).
        assert_eq!(ids(&idx.search("portlaq")), vec!["small", "big"]);
    }

    #[test]
    fn max_typos_option_filters_candidates() {
        let options = IndexOptions {
            max_typos: 1,
            ..IndexOptions::default()
        };
        let idx = PlaceIndex::build_with_options(
            vec![city("TH-1", "Bangkok", 5_000_000), city("GB-1", "Bangor", 10_000)],
            options,
        );
        // Bangor is two edits from "bangkk" and drops out.
        assert_eq!(ids(&idx.search("bangkk")), vec!["TH-1"]);
    }

    #[test]
    fn fuzzy_scores_against_primary_name_only() {
        let idx = PlaceIndex::build(vec![city_with("1", "Xylo", &["Roma"], 1)]);
        // Candidate via alternate "Roma"; compared to "xylo" and dropped.
        assert!(idx.search("romx").is_empty());
        assert_eq!(ids(&idx.search("rom")), vec!["1"]);
    }

    #[test]
    fn fuzzy_compares_whole_name_when_shorter_than_query() {
        let idx = PlaceIndex::build(vec![city("1", "Rome", 1)]);
        // "romexy" vs "rome": two insertions.
        assert_eq!(ids(&idx.search("romexy")), vec!["1"]);
        // "romexyz" would need "romexy"/"romex" buckets, which don't exist.
        assert!(idx.search("romexyz").is_empty());
    }

    #[test]
    fn two_char_query_trims_only_one() {
        let idx = PlaceIndex::build(vec![city("1", "Ab", 1)]);
        // "ax": tries "a" only; "ab" vs "ax" = 1.
        assert_eq!(ids(&idx.search("ax")), vec!["1"]);
    }

    #[test]
    fn shared_prefix_across_names_is_reported_once() {
        let idx = PlaceIndex::build(vec![
            city_with("1", "Saint Petersburg", &["Sankt-Peterburg", "Saint-Pétersbourg"], 5),
            city("2", "Salzburg", 1),
        ]);
        assert_eq!(ids(&idx.search("sa")), vec!["1", "2"]);
        assert_eq!(ids(&idx.search("saint")), vec!["1"]);
    }

    #[test]
    fn results_are_capped() {
        let places: Vec<Place> = (0..25).map(|i| city(&i.to_string(), &format!("Lake {i}"), 1)).collect();
        let idx = PlaceIndex::build(places);
        let hits = idx.search("lake");
        assert_eq!(hits.len(), 10);
        assert_eq!(ids(&hits), (0..10).map(|i| i.to_string()).collect::<Vec<_>>());

        let fuzzy = idx.search("lakx");
        assert_eq!(fuzzy.len(), 10);
    }

    #[test]
    fn exact_hit_suppresses_fuzzy() {
        let idx = PlaceIndex::build(vec![
            city("small", "Bangor", 10),
            city("big", "Bangkok", 5_000_000),
        ]);
        // "bango" exists as a prefix of Bangor, so Bangkok (distance 1 after
        // trimming) must not appear.
        assert_eq!(ids(&idx.search("bango")), vec!["small"]);
    }

    #[test]
    fn max_results_option_applies_to_both_paths() {
        let options = IndexOptions {
            max_results: 2,
            ..IndexOptions::default()
        };
        let places: Vec<Place> = (0..5).map(|i| city(&i.to_string(), "Lima", i)).collect();
        let idx = PlaceIndex::build_with_options(places, options);
        assert_eq!(idx.search("lim").len(), 2);
        assert_eq!(ids(&idx.search("limx")), vec!["4", "3"]);
    }

    #[test]
    fn get_by_id_and_count() {
        let idx = bangkok_bangor();
        assert_eq!(idx.get_by_id("GB-1").map(|p| p.name()), Some("Bangor"));
        assert!(idx.get_by_id("nope").is_none());
        assert!(idx.get_by_id("").is_none());
        assert_eq!(PlaceSearch::count(&idx), 2);
        assert_eq!(PlaceSearch::stats(&idx).cities, 2);
    }
}
