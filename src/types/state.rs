use std::collections::HashMap;

use crate::error::SizingError;

/// Explicit per-column pixel overrides, keyed by column id.
///
/// Absence of a key means "use the column's configured size". Values are
/// expected to be finite; this layer does not validate on write (hosts may
/// clamp before storing, and resolution clamps regardless). Unknown column
/// ids in the mapping are inert.
pub type ColumnSizingState = HashMap<String, f64>;

/// An update to [`ColumnSizingState`]: either a replacement mapping or a
/// function from the previous mapping to the next one.
pub enum SizingUpdater {
    Replace(ColumnSizingState),
    With(Box<dyn FnOnce(&ColumnSizingState) -> ColumnSizingState>),
}

impl SizingUpdater {
    /// Compute the next state from the previous one.
    pub fn apply(self, prev: &ColumnSizingState) -> ColumnSizingState {
        match self {
            Self::Replace(next) => next,
            Self::With(f) => f(prev),
        }
    }

    /// Functional update from a closure.
    pub fn with(f: impl FnOnce(&ColumnSizingState) -> ColumnSizingState + 'static) -> Self {
        Self::With(Box::new(f))
    }
}

impl From<ColumnSizingState> for SizingUpdater {
    fn from(next: ColumnSizingState) -> Self {
        Self::Replace(next)
    }
}

/// Opt-in strict check of the finiteness invariant on a state snapshot.
///
/// Resolution never runs this; it exists for hosts that want to reject a
/// bad snapshot (e.g. one restored from persistence) before installing it.
///
/// # Errors
/// Returns `SizingError::NonFinite` for the first non-finite override.
pub fn validate_state(state: &ColumnSizingState) -> Result<(), SizingError> {
    for (id, &value) in state {
        if !value.is_finite() {
            return Err(SizingError::NonFinite {
                id: id.clone(),
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn replace_updater_ignores_previous() {
        let prev = ColumnSizingState::from([("a".to_string(), 100.0)]);
        let next = SizingUpdater::Replace(ColumnSizingState::new()).apply(&prev);
        assert!(next.is_empty());
    }

    #[test]
    fn functional_updater_sees_previous() {
        let prev = ColumnSizingState::from([("a".to_string(), 100.0)]);
        let next = SizingUpdater::with(|s| {
            let mut s = s.clone();
            s.insert("b".to_string(), 200.0);
            s
        })
        .apply(&prev);
        assert_eq!(next.get("a"), Some(&100.0));
        assert_eq!(next.get("b"), Some(&200.0));
    }

    #[test]
    fn validate_state_flags_non_finite() {
        let state = ColumnSizingState::from([("a".to_string(), f64::INFINITY)]);
        assert!(matches!(
            validate_state(&state),
            Err(SizingError::NonFinite { .. })
        ));
        assert!(validate_state(&ColumnSizingState::new()).is_ok());
    }
}
