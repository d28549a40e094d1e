//! Error type shared by the facade and its backends.

use thiserror::Error;

/// Every way a facade call can be rejected.
///
/// Validation errors are raised synchronously by the call that broke the
/// precondition and are never retried internally.
#[derive(Debug, Error)]
pub enum GridError {
    /// Bad constructor or frame-rate argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed or out-of-range grid coordinate.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Unknown color name or malformed RGB triple.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The underlying display or input source failed.
    #[error("backend error: {0}")]
    Backend(#[from] std::io::Error),
}

impl GridError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GridError::InvalidArgument(_))
    }

    pub fn is_invalid_position(&self) -> bool {
        matches!(self, GridError::InvalidPosition(_))
    }

    pub fn is_invalid_color(&self) -> bool {
        matches!(self, GridError::InvalidColor(_))
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
