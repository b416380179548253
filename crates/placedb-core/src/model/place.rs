// crates/placedb-core/src/model/place.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of a geographic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    City,
    State,
    Country,
}

impl PlaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceKind::City => "city",
            PlaceKind::State => "state",
            PlaceKind::Country => "country",
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude/longitude pair.
///
/// The dataset producer writes `(0, 0)` when the source had no coordinates
/// (typical for states and countries). That pair is a sentinel, not a
/// location; use [`Coordinates::is_known`] or [`Place::location`] before
/// treating it as one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `false` for the `(0, 0)` "no coordinates" sentinel.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.lat != 0.0 || self.lng != 0.0
    }
}

/// A single place record as produced by the offline dataset tool.
///
/// Field names on the wire are camelCase and `kind` travels as `"type"`, so
/// the same derive serves both the loader and any JSON front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique key, e.g. `"TH-1609350"`, `"US.CA"` or `"TH"`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    pub name: String,
    /// Names in other scripts/languages, already filtered upstream.
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub country: String,
    pub country_code: String,
    pub coordinates: Coordinates,
    /// `0` means unknown.
    pub population: u64,
}

impl Place {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlaceKind {
        self.kind
    }

    /// Primary name followed by every alternate name, in dataset order.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alternate_names.iter().map(String::as_str))
    }

    /// Coordinates, or `None` for the `(0, 0)` sentinel.
    pub fn location(&self) -> Option<Coordinates> {
        self.coordinates.is_known().then_some(self.coordinates)
    }

    /// Population, or `None` when the dataset recorded it as unknown.
    pub fn population(&self) -> Option<u64> {
        (self.population > 0).then_some(self.population)
    }
}
