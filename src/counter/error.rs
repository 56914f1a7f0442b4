//! Error types for the count-up primitive.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised when configuring a count-up animation.
///
/// Rejected input never disturbs an animation already in flight: the caller
/// keeps seeing the last valid value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CountUpError {
    /// A start or target value was `NaN` or infinite.
    #[error("invalid {field} value: {value}")]
    NonFinite {
        /// Which value was rejected (`"start"` or `"end"`).
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A duration in seconds that cannot be turned into a `Duration`.
    #[error("invalid duration: {0}s")]
    InvalidDuration(f64),
}

impl CountUpError {
    /// Create a non-finite error for the given field.
    #[must_use]
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFinite { field, value }
    }
}

/// Result type for count-up operations.
pub type CountUpResult<T> = Result<T, CountUpError>;

/// Ensure `value` is finite, naming `field` in the error otherwise.
///
/// # Errors
///
/// Returns [`CountUpError::NonFinite`] for `NaN` and infinities.
pub fn ensure_finite(field: &'static str, value: f64) -> CountUpResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CountUpError::non_finite(field, value))
    }
}

// ============================================================================
// Tests
// ============================================================================
