// crates/placedb-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a dataset.
///
/// Queries never fail: an empty query or an unknown id yields an empty
/// result, so every variant here belongs to the startup path.
#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PlaceError>;
