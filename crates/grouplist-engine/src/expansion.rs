use grouplist_types::GroupId;
use serde::Serialize;
use std::collections::BTreeSet;

/// Set of groups whose rows are currently shown.
///
/// Treated as an immutable value: [`ExpansionState::toggle`] returns a new
/// state instead of mutating, so change detection is a plain equality check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: BTreeSet<GroupId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given groups already expanded (demo data, CLI flags).
    pub fn seeded<I: IntoIterator<Item = GroupId>>(group_ids: I) -> Self {
        Self {
            expanded: group_ids.into_iter().collect(),
        }
    }

    pub fn is_expanded(&self, group_id: GroupId) -> bool {
        self.expanded.contains(&group_id)
    }

    /// Flip membership of `group_id`. The id does not need to name a real
    /// group; unknown ids simply match no rows.
    #[must_use]
    pub fn toggle(&self, group_id: GroupId) -> Self {
        let mut expanded = self.expanded.clone();
        if !expanded.remove(&group_id) {
            expanded.insert(group_id);
        }
        Self { expanded }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.expanded.iter().copied()
    }
}

/// Owner of the current [`ExpansionState`].
///
/// Each toggle swaps in a new state value and bumps `revision`; renderers
/// poll the revision to know when to redraw. Must only be touched from the
/// thread that runs the UI loop.
#[derive(Debug, Default)]
pub struct ExpansionStore {
    state: ExpansionState,
    revision: u64,
}

impl ExpansionStore {
    pub fn new(initial: ExpansionState) -> Self {
        Self {
            state: initial,
            revision: 0,
        }
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_expanded(&self, group_id: GroupId) -> bool {
        self.state.is_expanded(group_id)
    }

    /// Toggle `group_id` and return whether it is now expanded.
    pub fn toggle(&mut self, group_id: GroupId) -> bool {
        self.state = self.state.toggle(group_id);
        self.revision = self.revision.wrapping_add(1);
        self.state.is_expanded(group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_collapsed() {
        let state = ExpansionState::new();
        assert!(state.is_empty());
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let before = ExpansionState::new();
        let after = before.toggle(7);

        assert!(!before.is_expanded(7));
        assert!(after.is_expanded(7));
        assert_ne!(before, after);
        assert_eq!(after.toggle(7), before);
    }

    #[test]
    fn test_seeded_state() {
        let state = ExpansionState::seeded([3, 1, 3]);
        assert_eq!(state.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_store_bumps_revision_per_toggle() {
        let mut store = ExpansionStore::new(ExpansionState::seeded([1]));
        assert_eq!(store.revision(), 0);

        assert!(!store.toggle(1));
        assert!(store.toggle(2));
        assert!(store.toggle(1));

        assert_eq!(store.revision(), 3);
        assert_eq!(store.state(), &ExpansionState::seeded([1, 2]));
        assert!(store.is_expanded(2));
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(
            seed in prop::collection::btree_set(-5i64..20, 0..10),
            group_id in -5i64..20,
        ) {
            let state = ExpansionState::seeded(seed);
            let twice = state.toggle(group_id).toggle(group_id);
            prop_assert_eq!(twice.is_expanded(group_id), state.is_expanded(group_id));
            prop_assert_eq!(twice, state);
        }

        #[test]
        fn rapid_toggles_keep_last_write(toggles in prop::collection::vec(0i64..4, 0..40)) {
            let mut store = ExpansionStore::default();
            for group_id in &toggles {
                store.toggle(*group_id);
            }
            for group_id in 0..4 {
                let flips = toggles.iter().filter(|g| **g == group_id).count();
                prop_assert_eq!(store.is_expanded(group_id), flips % 2 == 1);
            }
            prop_assert_eq!(store.revision(), toggles.len() as u64);
        }
    }
}
