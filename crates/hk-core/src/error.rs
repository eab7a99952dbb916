//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `HkError` as one variant
//! via `From`, so parameter validation failures surface unchanged all the way
//! up to the caller.

use thiserror::Error;

/// The top-level error type for `hk-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HkError {
    /// A hiker, pack, or terrain parameter failed validation.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name:   &'static str,
        reason: String,
    },

    /// The track is too short to form even one segment.
    #[error("track has {0} point(s); at least 2 are required")]
    InsufficientPoints(usize),
}

impl HkError {
    /// Shorthand for an [`HkError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        HkError::InvalidParameter { name, reason: reason.into() }
    }

    /// `true` for the validation class of errors (bad parameter or a track
    /// too short to process).
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, HkError::InvalidParameter { .. } | HkError::InsufficientPoints(_))
    }
}

/// Shorthand result type for all `hk-*` crates.
pub type HkResult<T> = Result<T, HkError>;

/// Reject NaN / infinite values with a named [`HkError::InvalidParameter`].
pub(crate) fn require_finite(name: &'static str, value: f64) -> HkResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HkError::invalid(name, format!("must be finite, got {value}")))
    }
}
