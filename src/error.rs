//! Structured error types for gridsize.
//!
//! Size resolution itself never fails — malformed inputs degrade to a
//! clamped numeric default so a bad column config cannot break rendering.
//! These errors belong to the opt-in validation layer
//! ([`ColumnSizeConfig::validate`](crate::types::ColumnSizeConfig::validate)
//! and [`validate_state`](crate::types::validate_state)) that hosts may run
//! at column-definition time instead.

/// Errors reported by the opt-in validation layer.
#[derive(Debug, thiserror::Error)]
pub enum SizingError {
    /// A column's minimum size exceeds its maximum size.
    #[error("column {id}: min size {min} exceeds max size {max}")]
    InvertedBounds { id: String, min: f64, max: f64 },

    /// A configured bound or stored override is NaN or infinite.
    #[error("column {id}: {value} is not a finite size")]
    NonFinite { id: String, value: f64 },
}
