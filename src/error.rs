//! Error types for vitrine operations.

use thiserror::Error;

/// Errors that can occur while loading or decoding a catalog payload.
///
/// The mapping core itself never fails: absent data maps to an empty tree
/// and unparseable titles fall back to the record id.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
