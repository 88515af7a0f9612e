//! Resolves one column's effective pixel size from override state and
//! configuration.

use crate::types::{ColumnSizeConfig, ColumnSizingState, DEFAULT_COLUMN_SIZE};

/// Resolve the effective size of a column.
///
/// Starts from the stored override if one exists, otherwise from the
/// configured size (default 150.0), then clamps into
/// `[min_size, max_size]`. The minimum is applied before the maximum, so
/// inverted bounds (`min > max`) deterministically resolve to `max_size`
/// rather than failing.
///
/// Pure and total: safe to call repeatedly per render pass.
pub fn resolve_size(column_id: &str, state: &ColumnSizingState, config: &ColumnSizeConfig) -> f64 {
    let base = state
        .get(column_id)
        .copied()
        .unwrap_or_else(|| config.size.unwrap_or(DEFAULT_COLUMN_SIZE));

    base.max(config.min()).min(config.max())
}
