//! Layered error types

use lamina_core::CoreError;
use thiserror::Error;

/// Engine-level errors.
///
/// These never escape [`crate::DocumentChunker::process`]; they are folded
/// into the `errors` array of the output so batch callers can keep going.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core configuration or algorithm error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Upstream extraction produced nothing usable
    #[error("extraction produced no usable text: {reason}")]
    Extraction {
        /// Why the text was rejected
        reason: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
