//! Error kinds surfaced by the color engine.

use thiserror::Error;

/// Errors produced while building, converting or contrasting colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Malformed or out-of-range RGB, hex, HSL or name input.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A contrast bound outside of [1, 21] was requested.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required minimum contrast cannot be met.
    #[error("contrast of at least {min_contrast} cannot be met: {reason}")]
    ContrastUnsatisfiable {
        /// The requested minimum contrast ratio
        min_contrast: f64,
        /// Which colors are involved and why the bound fails
        reason: String,
    },

    /// Random background draws exceeded the configured attempt limit.
    #[error("no random background satisfied the contrast constraints after {attempts} draws")]
    RetryLimitExceeded {
        /// Number of draws performed before giving up
        attempts: usize,
    },

    /// A color name table is empty or contains malformed/duplicate entries.
    #[error("invalid color table: {0}")]
    InvalidPalette(String),
}

impl ColorError {
    /// Whether this error is a contrast failure that a random retry may resolve.
    pub fn is_contrast_unsatisfiable(&self) -> bool {
        matches!(self, Self::ContrastUnsatisfiable { .. })
    }
}
