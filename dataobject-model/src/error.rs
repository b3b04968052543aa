//! Error types for the data object model.

use thiserror::Error;

/// Result type for data object operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building, mutating or encoding a data object.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Input rejected by the cheap JSON pre-checks, before any decoding.
    #[error("invalid json: {0}")]
    InvalidJson(&'static str),

    /// Decoded payload has no usable `id` attribute.
    #[error("invalid {format} data: missing id")]
    MissingId { format: &'static str },

    /// Binary payload is not an encoded string-to-string map.
    #[error("invalid binary data: {0}")]
    InvalidBinary(#[from] rmp_serde::decode::Error),

    /// JSON codec failure (syntax errors past the pre-checks, encoding).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding failure.
    #[error("binary encoding error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// A registered transformer refused a value.
    #[error("transformer for {key:?} failed: {reason}")]
    Transform { key: String, reason: String },

    /// A transformer is already registered for this attribute.
    #[error("transformer already registered for {0:?}")]
    DuplicateTransformer(String),

    /// The attribute is reserved and cannot carry a transformer.
    #[error("attribute {0:?} is reserved")]
    ReservedAttribute(String),

    /// Repository already holds an object with this id.
    #[error("object already exists: {0}")]
    AlreadyExists(String),

    /// Repository holds no object with this id.
    #[error("object not found: {0}")]
    NotFound(String),

    /// An update carried a pending change of the record's id.
    #[error("cannot update object under a changed id: {0}")]
    IdChanged(String),
}

impl ModelError {
    /// Returns true for malformed or structurally invalid constructor input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson(_) | Self::MissingId { .. } | Self::InvalidBinary(_)
        )
    }
}
