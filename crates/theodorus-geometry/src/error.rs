//! Error types for theodorus-geometry.

use thiserror::Error;

/// Result type for spiral geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating spiral inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A caller-supplied parameter violates its precondition.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
