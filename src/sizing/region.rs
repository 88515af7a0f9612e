//! Pinning-region selection and per-region size totals.

use crate::sizing::resolve_size;
use crate::types::{ColumnSizingState, LeafColumn, PinnedPosition};

/// Region of the table selected for totals and offsets.
///
/// `Center` matches only unpinned columns (pinned columns render in their
/// own sticky tracks and are excluded from center accounting); `All`
/// matches every leaf column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingRegion {
    Left,
    Right,
    Center,
    #[default]
    All,
}

impl SizingRegion {
    /// Region membership predicate.
    ///
    /// This is the single definition shared by [`total_size`] and the
    /// offset calculator, which keeps `start + size + after == total`
    /// consistent for every region.
    pub fn contains(self, pinned: PinnedPosition) -> bool {
        match self {
            Self::Left => pinned == PinnedPosition::Left,
            Self::Right => pinned == PinnedPosition::Right,
            Self::Center => pinned == PinnedPosition::Center,
            Self::All => true,
        }
    }
}

impl From<PinnedPosition> for SizingRegion {
    fn from(pinned: PinnedPosition) -> Self {
        match pinned {
            PinnedPosition::Left => Self::Left,
            PinnedPosition::Right => Self::Right,
            PinnedPosition::Center => Self::Center,
        }
    }
}

/// Total resolved size of all leaf columns in `region`.
///
/// An empty region yields 0.0. Adding a column can never decrease a total
/// (resolved sizes are non-negative after clamping).
pub fn total_size(region: SizingRegion, columns: &[LeafColumn], state: &ColumnSizingState) -> f64 {
    columns
        .iter()
        .filter(|c| region.contains(c.pinned))
        .map(|c| resolve_size(&c.id, state, &c.config))
        .sum()
}
