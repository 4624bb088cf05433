//! Payload shape errors

use thiserror::Error;

/// JSON parsed fine but does not look like anything we know how to map.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Neither a `{ "products": [...] }` envelope nor a flat item array
    #[error("Unrecognized payload shape: expected {expected}")]
    Unrecognized { expected: &'static str },

    /// Recognized envelope, but its entries failed to decode
    #[error("Invalid entries: {0}")]
    Entries(#[from] serde_json::Error),
}
