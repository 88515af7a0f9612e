use serde::{Deserialize, Serialize};

use crate::error::SizingError;

/// Default column size in pixels when a column defines none.
pub const DEFAULT_COLUMN_SIZE: f64 = 150.0;

/// Default lower bound for a resolved column size.
pub const DEFAULT_MIN_SIZE: f64 = 20.0;

/// Default upper bound for a resolved column size (largest integer a grid
/// host can represent without precision loss).
pub const DEFAULT_MAX_SIZE: f64 = 9_007_199_254_740_991.0;

/// Per-column size configuration, owned by the external column model and
/// read-only here. Unset fields fall back to the `DEFAULT_*` constants.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSizeConfig {
    /// Desired size in pixels when no override is stored.
    pub size: Option<f64>,
    /// Minimum allowed size.
    pub min_size: Option<f64>,
    /// Maximum allowed size.
    pub max_size: Option<f64>,
}

impl ColumnSizeConfig {
    /// Effective lower bound.
    pub fn min(&self) -> f64 {
        self.min_size.unwrap_or(DEFAULT_MIN_SIZE)
    }

    /// Effective upper bound.
    pub fn max(&self) -> f64 {
        self.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Opt-in strict check for use at column-definition time.
    ///
    /// Size resolution never runs this: inverted bounds are silently
    /// clamped there (min first, so the result collapses to `max_size`).
    /// Hosts that prefer rejecting such configs up front call this when
    /// building their column model.
    ///
    /// # Errors
    /// Returns `SizingError::InvertedBounds` if `min_size > max_size` and
    /// `SizingError::NonFinite` if any bound or the default size is not a
    /// finite number.
    pub fn validate(&self, column_id: &str) -> Result<(), SizingError> {
        for value in [self.size, self.min_size, self.max_size].into_iter().flatten() {
            if !value.is_finite() {
                return Err(SizingError::NonFinite {
                    id: column_id.to_string(),
                    value,
                });
            }
        }
        if self.min() > self.max() {
            return Err(SizingError::InvertedBounds {
                id: column_id.to_string(),
                min: self.min(),
                max: self.max(),
            });
        }
        Ok(())
    }
}

/// Pinned position of a leaf column. Every column is in exactly one
/// position at evaluation time; unpinned columns are `Center`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PinnedPosition {
    Left,
    Right,
    #[default]
    Center,
}

/// Read-only view of one leaf column as consumed by this core: identity,
/// size configuration, and pinned position. The external column model
/// supplies these in visible order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeafColumn {
    pub id: String,
    pub config: ColumnSizeConfig,
    pub pinned: PinnedPosition,
}

impl LeafColumn {
    /// Create an unpinned column with default sizing.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: ColumnSizeConfig::default(),
            pinned: PinnedPosition::Center,
        }
    }

    /// Set the desired size.
    pub fn size(mut self, size: f64) -> Self {
        self.config.size = Some(size);
        self
    }

    /// Set the minimum allowed size.
    pub fn min_size(mut self, min: f64) -> Self {
        self.config.min_size = Some(min);
        self
    }

    /// Set the maximum allowed size.
    pub fn max_size(mut self, max: f64) -> Self {
        self.config.max_size = Some(max);
        self
    }

    /// Set the pinned position.
    pub fn pinned(mut self, pinned: PinnedPosition) -> Self {
        self.pinned = pinned;
        self
    }
}
