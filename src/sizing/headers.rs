//! Header sizing.
//!
//! A header spans a contiguous run of leaf columns; group headers span
//! more than one. A header's size is the summed resolved size of its
//! leaves, and its start offset is the summed size of the headers before
//! it in the same header row.

use crate::sizing::resolve_size;
use crate::types::{ColumnSizingState, LeafColumn};

/// Resolved size of a header spanning `leaves`.
pub fn header_size(leaves: &[LeafColumn], state: &ColumnSizingState) -> f64 {
    leaves
        .iter()
        .map(|c| resolve_size(&c.id, state, &c.config))
        .sum()
}

/// Start offset of the header at `index` within a header row, where each
/// element of `row` is the leaf span of one header in visible order.
///
/// An out-of-range `index` yields 0.0, matching the unknown-column
/// behavior of the column offsets.
pub fn header_start(row: &[&[LeafColumn]], index: usize, state: &ColumnSizingState) -> f64 {
    if index >= row.len() {
        return 0.0;
    }
    row.iter()
        .take(index)
        .map(|leaves| header_size(leaves, state))
        .sum()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use crate::types::ColumnSizingState;

    fn leaves() -> Vec<LeafColumn> {
        vec![
            LeafColumn::new("a").size(100.0),
            LeafColumn::new("b").size(50.0),
            LeafColumn::new("c"),
        ]
    }

    #[test]
    fn group_header_sums_spanned_leaves() {
        let cols = leaves();
        let state = ColumnSizingState::new();
        assert_eq!(header_size(&cols, &state), 300.0);
        assert_eq!(header_size(&cols[..1], &state), 100.0);
        assert_eq!(header_size(&[], &state), 0.0);
    }

    #[test]
    fn header_size_tracks_overrides() {
        let cols = leaves();
        let state = ColumnSizingState::from([("b".to_string(), 75.0)]);
        assert_eq!(header_size(&cols, &state), 325.0);
    }

    #[test]
    fn header_start_sums_preceding_headers() {
        let cols = leaves();
        let state = ColumnSizingState::new();
        // Two headers: a group over [a, b] and a plain header over [c].
        let row: Vec<&[LeafColumn]> = vec![&cols[..2], &cols[2..]];
        assert_eq!(header_start(&row, 0, &state), 0.0);
        assert_eq!(header_start(&row, 1, &state), 150.0);
        assert_eq!(header_start(&row, 5, &state), 0.0);
    }
}
