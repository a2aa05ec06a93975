//! Error types for core primitives

use thiserror::Error;

/// Errors produced by core configuration and splitting primitives
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration rejected before any processing
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the rejected value
        reason: String,
    },
}

impl CoreError {
    /// Convenience constructor for configuration errors
    pub fn config(reason: impl Into<String>) -> Self {
        CoreError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
