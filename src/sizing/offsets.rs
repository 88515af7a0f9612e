//! Cumulative start/end offsets for sticky-column positioning.
//!
//! A column's start offset is the summed resolved size of every column
//! before it within its region; the after offset is the symmetric sum over
//! the columns behind it. The rendering layer uses these as fixed pixel
//! insets for pinned/sticky tracks.

use crate::sizing::{resolve_size, SizingRegion};
use crate::types::{ColumnSizingState, LeafColumn};

/// Sum of resolved sizes of all columns strictly before `column_id` in
/// `columns`, restricted to the columns `region` contains.
///
/// Returns 0.0 when `column_id` is not in the scoped sequence.
pub fn start_offset(
    column_id: &str,
    region: SizingRegion,
    columns: &[LeafColumn],
    state: &ColumnSizingState,
) -> f64 {
    scoped_sum(column_id, region, columns, state, Side::Before)
}

/// Sum of resolved sizes of all columns strictly after `column_id` in
/// `columns`, restricted to the columns `region` contains.
///
/// Returns 0.0 when `column_id` is not in the scoped sequence.
pub fn after_offset(
    column_id: &str,
    region: SizingRegion,
    columns: &[LeafColumn],
    state: &ColumnSizingState,
) -> f64 {
    scoped_sum(column_id, region, columns, state, Side::After)
}

#[derive(Clone, Copy)]
enum Side {
    Before,
    After,
}

fn scoped_sum(
    column_id: &str,
    region: SizingRegion,
    columns: &[LeafColumn],
    state: &ColumnSizingState,
    side: Side,
) -> f64 {
    let scoped: Vec<&LeafColumn> = columns
        .iter()
        .filter(|c| region.contains(c.pinned))
        .collect();
    let Some(index) = scoped.iter().position(|c| c.id == column_id) else {
        return 0.0;
    };

    let resolved = scoped.iter().map(|c| resolve_size(&c.id, state, &c.config));
    match side {
        Side::Before => resolved.take(index).sum(),
        Side::After => resolved.skip(index + 1).sum(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use crate::sizing::total_size;
    use crate::types::{ColumnSizingState, PinnedPosition};

    fn columns() -> Vec<LeafColumn> {
        vec![
            LeafColumn::new("l1").size(30.0).pinned(PinnedPosition::Left),
            LeafColumn::new("c1").size(100.0),
            LeafColumn::new("l2").size(40.0).pinned(PinnedPosition::Left),
            LeafColumn::new("c2").size(200.0),
            LeafColumn::new("r1").size(60.0).pinned(PinnedPosition::Right),
        ]
    }

    #[test]
    fn start_sums_preceding_columns_in_region() {
        let cols = columns();
        let state = ColumnSizingState::new();
        // l2 is the second left-pinned column; only l1 precedes it there.
        assert_eq!(start_offset("l2", SizingRegion::Left, &cols, &state), 30.0);
        // In the unscoped sequence, l1, c1 precede l2.
        assert_eq!(start_offset("l2", SizingRegion::All, &cols, &state), 130.0);
    }

    #[test]
    fn center_scope_excludes_pinned_columns() {
        let cols = columns();
        let state = ColumnSizingState::new();
        // c2's only center predecessor is c1; the pinned columns between
        // them live in separate sticky tracks.
        assert_eq!(start_offset("c2", SizingRegion::Center, &cols, &state), 100.0);
        assert_eq!(after_offset("c1", SizingRegion::Center, &cols, &state), 200.0);
    }

    #[test]
    fn unknown_column_yields_zero() {
        let cols = columns();
        let state = ColumnSizingState::new();
        assert_eq!(start_offset("nope", SizingRegion::All, &cols, &state), 0.0);
        assert_eq!(after_offset("nope", SizingRegion::All, &cols, &state), 0.0);
        // Known column, but outside the requested region.
        assert_eq!(start_offset("c1", SizingRegion::Left, &cols, &state), 0.0);
    }

    #[test]
    fn offsets_reconcile_with_region_totals() {
        let cols = columns();
        let state = ColumnSizingState::from([("c1".to_string(), 120.0)]);
        for col in &cols {
            let region = SizingRegion::from(col.pinned);
            let size = resolve_size(&col.id, &state, &col.config);
            let sum = start_offset(&col.id, region, &cols, &state)
                + size
                + after_offset(&col.id, region, &cols, &state);
            assert_eq!(sum, total_size(region, &cols, &state), "column {}", col.id);
        }
    }
}
