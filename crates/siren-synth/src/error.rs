//! Error types for siren synthesis.

use thiserror::Error;

/// Result type for siren operations.
pub type SirenResult<T> = Result<T, SirenError>;

/// Errors that can occur during preset handling and synthesis.
#[derive(Debug, Error)]
pub enum SirenError {
    /// A preset field failed validation.
    #[error("invalid preset field '{field}': {message}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// Why the field was rejected.
        message: String,
    },

    /// Preset lookup miss.
    #[error("unknown preset '{name}' (available: {available})")]
    UnknownPreset {
        /// The requested preset name.
        name: String,
        /// Comma-separated list of registered preset names.
        available: String,
    },

    /// Invalid runtime request value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Which constraint was violated.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SirenError {
    /// Creates a validation error for a named preset field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
