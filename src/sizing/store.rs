//! Owning store for the column-sizing state slice.
//!
//! The store holds the override mapping and the initial snapshot captured
//! at construction, and funnels every mutation through one dispatch path.
//! When the host registers a change handler the store runs controlled: the
//! computed next state is forwarded to the handler and the internal copy
//! is left untouched — the external owner becomes authoritative and
//! pushes state back in via [`SizingStore::sync`]. Without a handler the
//! store replaces its own copy (uncontrolled). The next-state computation
//! is identical either way; only the write target differs.

use crate::sizing::{after_offset, resolve_size, start_offset, total_size, SizingRegion};
use crate::types::{ColumnSizingState, LeafColumn, SizingUpdater};

/// External change handler receiving the computed next state.
pub type OnSizingChange = Box<dyn FnMut(ColumnSizingState)>;

/// Owns the `columnSizing` state slice for one table instance.
pub struct SizingStore {
    sizing: ColumnSizingState,
    initial: ColumnSizingState,
    on_change: Option<OnSizingChange>,
}

impl SizingStore {
    /// Create a store with an empty mapping.
    pub fn new() -> Self {
        Self::with_initial(ColumnSizingState::new())
    }

    /// Create a store from an initial snapshot. The snapshot is also kept
    /// as the target of `reset_column_sizing(false)`.
    pub fn with_initial(initial: ColumnSizingState) -> Self {
        Self {
            sizing: initial.clone(),
            initial,
            on_change: None,
        }
    }

    /// Register an external change handler, switching the store to
    /// controlled mode.
    pub fn on_change(mut self, handler: impl FnMut(ColumnSizingState) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Current mapping, read-only.
    pub fn column_sizing(&self) -> &ColumnSizingState {
        &self.sizing
    }

    /// Controlled-mode write-back: the external owner installs the
    /// authoritative state into the store's snapshot.
    pub fn sync(&mut self, state: ColumnSizingState) {
        self.sizing = state;
    }

    /// Apply an updater through the controlled/uncontrolled dispatch path.
    pub fn set_column_sizing(&mut self, updater: impl Into<SizingUpdater>) {
        self.dispatch(updater.into());
    }

    /// Reset the mapping: to empty when `use_default` is true (every
    /// column falls back to its configured size), otherwise to the initial
    /// snapshot captured at construction.
    pub fn reset_column_sizing(&mut self, use_default: bool) {
        let next = if use_default {
            ColumnSizingState::new()
        } else {
            self.initial.clone()
        };
        self.dispatch(SizingUpdater::Replace(next));
    }

    /// Remove exactly one column's override, restoring its configured
    /// size. Other overrides are untouched.
    pub fn reset_size(&mut self, column_id: &str) {
        let id = column_id.to_string();
        self.dispatch(SizingUpdater::with(move |prev| {
            let mut next = prev.clone();
            next.remove(&id);
            next
        }));
    }

    // Single dispatch path: compute the next state once, then branch on
    // the write target. The computation must never be duplicated per mode.
    fn dispatch(&mut self, updater: SizingUpdater) {
        let next = updater.apply(&self.sizing);
        match &mut self.on_change {
            Some(handler) => handler(next),
            None => self.sizing = next,
        }
    }

    /// Resolved size of one column against the current snapshot.
    pub fn size_of(&self, column: &LeafColumn) -> f64 {
        resolve_size(&column.id, &self.sizing, &column.config)
    }

    /// Start offset of a column within `region` (see
    /// [`start_offset`](crate::sizing::start_offset)).
    pub fn start_of(&self, column_id: &str, region: SizingRegion, columns: &[LeafColumn]) -> f64 {
        start_offset(column_id, region, columns, &self.sizing)
    }

    /// After offset of a column within `region` (see
    /// [`after_offset`](crate::sizing::after_offset)).
    pub fn after_of(&self, column_id: &str, region: SizingRegion, columns: &[LeafColumn]) -> f64 {
        after_offset(column_id, region, columns, &self.sizing)
    }

    /// Total size of the left-pinned track.
    pub fn left_total_size(&self, columns: &[LeafColumn]) -> f64 {
        total_size(SizingRegion::Left, columns, &self.sizing)
    }

    /// Total size of the right-pinned track.
    pub fn right_total_size(&self, columns: &[LeafColumn]) -> f64 {
        total_size(SizingRegion::Right, columns, &self.sizing)
    }

    /// Total size of the unpinned center track.
    pub fn center_total_size(&self, columns: &[LeafColumn]) -> f64 {
        total_size(SizingRegion::Center, columns, &self.sizing)
    }

    /// Total size of all leaf columns.
    pub fn total_size(&self, columns: &[LeafColumn]) -> f64 {
        total_size(SizingRegion::All, columns, &self.sizing)
    }
}

impl Default for SizingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SizingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizingStore")
            .field("sizing", &self.sizing)
            .field("initial", &self.initial)
            .field("controlled", &self.on_change.is_some())
            .finish()
    }
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
    use std::cell::RefCell;
    use std::rc::Rc;

    fn initial() -> ColumnSizingState {
        ColumnSizingState::from([("a".to_string(), 100.0)])
    }

    #[test]
    fn uncontrolled_set_replaces_internal_state() {
        let mut store = SizingStore::new();
        store.set_column_sizing(ColumnSizingState::from([("a".to_string(), 200.0)]));
        assert_eq!(store.column_sizing().get("a"), Some(&200.0));
    }

    #[test]
    fn functional_update_round_trips() {
        let mut store = SizingStore::with_initial(initial());
        store.set_column_sizing(SizingUpdater::with(|prev| {
            let mut next = prev.clone();
            next.insert("b".to_string(), 200.0);
            next
        }));
        assert_eq!(store.column_sizing().get("a"), Some(&100.0));
        assert_eq!(store.column_sizing().get("b"), Some(&200.0));
    }

    #[test]
    fn reset_to_default_empties_the_mapping() {
        let mut store = SizingStore::with_initial(initial());
        store.reset_column_sizing(true);
        assert!(store.column_sizing().is_empty());
        // Idempotent.
        store.reset_column_sizing(true);
        assert!(store.column_sizing().is_empty());
    }

    #[test]
    fn reset_to_initial_restores_construction_snapshot() {
        let mut store = SizingStore::with_initial(initial());
        store.set_column_sizing(ColumnSizingState::from([("b".to_string(), 50.0)]));
        store.reset_column_sizing(false);
        assert_eq!(store.column_sizing(), &initial());
    }

    #[test]
    fn reset_size_removes_only_that_key() {
        let mut store = SizingStore::with_initial(ColumnSizingState::from([
            ("a".to_string(), 100.0),
            ("b".to_string(), 200.0),
        ]));
        store.reset_size("a");
        assert_eq!(store.column_sizing().get("a"), None);
        assert_eq!(store.column_sizing().get("b"), Some(&200.0));
        // Unknown key is a no-op, not an error.
        store.reset_size("zzz");
        assert_eq!(store.column_sizing().len(), 1);
    }

    #[test]
    fn controlled_mode_forwards_without_mutating() {
        let seen: Rc<RefCell<Vec<ColumnSizingState>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut store =
            SizingStore::with_initial(initial()).on_change(move |next| sink.borrow_mut().push(next));

        store.set_column_sizing(SizingUpdater::with(|prev| {
            let mut next = prev.clone();
            next.insert("b".to_string(), 300.0);
            next
        }));

        // Handler called exactly once with the computed next state.
        let calls = seen.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("a"), Some(&100.0));
        assert_eq!(calls[0].get("b"), Some(&300.0));
        // Internal snapshot untouched.
        assert_eq!(store.column_sizing(), &initial());
    }

    #[test]
    fn controlled_reset_goes_through_the_handler() {
        let seen: Rc<RefCell<Vec<ColumnSizingState>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut store =
            SizingStore::with_initial(initial()).on_change(move |next| sink.borrow_mut().push(next));

        store.reset_column_sizing(true);
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].is_empty());
        assert_eq!(store.column_sizing(), &initial());
    }

    #[test]
    fn sync_installs_external_state() {
        let mut store = SizingStore::with_initial(initial()).on_change(|_| {});
        store.sync(ColumnSizingState::from([("b".to_string(), 42.0)]));
        assert_eq!(store.column_sizing().get("b"), Some(&42.0));
        assert_eq!(store.column_sizing().get("a"), None);
    }
}
