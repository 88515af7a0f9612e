//! gridsize - headless column-sizing core for data grids
//!
//! Manages the per-column width state slice of a tabular grid:
//! - resolves an effective pixel size per leaf column and header, clamped
//!   to configured bounds
//! - aggregates resolved sizes into pinned-region and whole-table totals
//! - computes cumulative start/end offsets for sticky-column positioning
//! - owns the override mapping with controlled/uncontrolled update and
//!   reset semantics
//!
//! Rendering, resize gestures, virtualization and the rest of the grid are
//! external collaborators: this crate only reads the column model
//! ([`LeafColumn`] order, config, pinning) and never fails — malformed
//! inputs degrade to clamped numeric defaults so a bad column definition
//! cannot break table rendering.
//!
//! # Usage
//!
//! ```
//! use gridsize::{LeafColumn, PinnedPosition, SizingRegion, SizingStore};
//!
//! let columns = vec![
//!     LeafColumn::new("id").size(50.0).pinned(PinnedPosition::Left),
//!     LeafColumn::new("name").size(100.0),
//!     LeafColumn::new("notes"),
//! ];
//!
//! let mut store = SizingStore::new();
//! assert_eq!(store.left_total_size(&columns), 50.0);
//! assert_eq!(store.total_size(&columns), 300.0);
//!
//! store.set_column_sizing(gridsize::SizingUpdater::with(|prev| {
//!     let mut next = prev.clone();
//!     next.insert("name".to_string(), 240.0);
//!     next
//! }));
//! assert_eq!(store.start_of("notes", SizingRegion::Center, &columns), 240.0);
//! ```

pub mod error;
pub mod sizing;
pub mod types;

pub use error::SizingError;
pub use sizing::*;
pub use types::*;
