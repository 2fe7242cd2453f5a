//! Bulk row selection with tri-state "select all".

use std::collections::BTreeSet;

/// Glyph state of a "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    #[default]
    None,
    Some,
    All,
}

#[derive(Debug, Clone)]
pub struct BulkSelectionController<Id: Ord> {
    selected: BTreeSet<Id>,
}

impl<Id: Ord> Default for BulkSelectionController<Id> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<Id: Ord + Clone> BulkSelectionController<Id> {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is currently selected.
    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Selects `id`, or deselects it if it was already selected.
    pub fn toggle(&mut self, id: Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Deselects everything, including ids outside the current page.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Deselects `visible` if all of it is selected, otherwise selects all of
    /// it. Ids outside `visible` are left alone.
    pub fn toggle_all(&mut self, visible: &[Id]) {
        if self.covers(visible) {
            for id in visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible.iter().cloned());
        }
    }

    /// True when `visible` is non-empty and every id in it is selected.
    pub fn all_selected(&self, visible: &[Id]) -> bool {
        !visible.is_empty() && self.covers(visible)
    }

    /// Something is selected, but not all of `visible`.
    pub fn some_selected(&self, visible: &[Id]) -> bool {
        !self.selected.is_empty() && !self.all_selected(visible)
    }

    /// State of the header checkbox for `visible`.
    pub fn tri_state(&self, visible: &[Id]) -> TriState {
        if self.all_selected(visible) {
            TriState::All
        } else if self.some_selected(visible) {
            TriState::Some
        } else {
            TriState::None
        }
    }

    /// Number of selected ids, visible or not.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &Id> {
        self.selected.iter()
    }

    /// Drops every selected id that is not in `visible`.
    ///
    /// Pages call this after each applied fetch so selection never points at
    /// rows that are no longer shown.
    pub fn retain_visible(&mut self, visible: &[Id]) {
        let before = self.selected.len();
        self.selected.retain(|id| visible.contains(id));
        let dropped = before - self.selected.len();
        if dropped > 0 {
            log::debug!("dropped {dropped} selected ids no longer visible");
        }
    }

    /// Removes a single id, e.g. after it was deleted.
    pub fn deselect(&mut self, id: &Id) {
        self.selected.remove(id);
    }

    fn covers(&self, visible: &[Id]) -> bool {
        visible.iter().all(|id| self.selected.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<u32>) -> Vec<u32> {
        range.collect()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = BulkSelectionController::new();
        sel.toggle(1_u32);
        assert!(sel.is_selected(&1));
        assert_eq!(sel.count(), 1);
        sel.toggle(1);
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn toggle_all_twice_restores_original_selection() {
        let visible = ids(0..5);
        let mut sel = BulkSelectionController::new();
        sel.toggle(2_u32);
        sel.toggle(42);

        sel.toggle_all(&visible);
        assert!(sel.all_selected(&visible));
        assert_eq!(sel.count(), 6);

        sel.toggle_all(&visible);
        assert!(!sel.is_selected(&2));
        // Off-page selection survives select-all toggles.
        assert!(sel.is_selected(&42));
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn toggle_all_round_trip_from_empty() {
        let visible = ids(10..20);
        let mut sel = BulkSelectionController::new();
        sel.toggle_all(&visible);
        sel.toggle_all(&visible);
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn tri_state_tracks_visible_coverage() {
        let visible = ids(0..3);
        let mut sel = BulkSelectionController::new();
        assert_eq!(sel.tri_state(&visible), TriState::None);

        sel.toggle(0);
        assert!(sel.some_selected(&visible));
        assert_eq!(sel.tri_state(&visible), TriState::Some);

        sel.toggle(1);
        sel.toggle(2);
        assert_eq!(sel.tri_state(&visible), TriState::All);
        assert!(!sel.some_selected(&visible));
    }

    #[test]
    fn empty_page_is_never_all_selected() {
        let mut sel = BulkSelectionController::new();
        sel.toggle(5_u32);
        assert!(!sel.all_selected(&[]));
        assert!(sel.some_selected(&[]));
    }

    #[test]
    fn select_all_then_filter_leaves_no_ghosts() {
        let first_page = ids(0..10);
        let filtered = ids(100..110);
        let mut sel = BulkSelectionController::new();
        sel.toggle_all(&first_page);
        assert_eq!(sel.count(), 10);

        sel.retain_visible(&filtered);
        assert_eq!(sel.count(), 0);
        assert_eq!(sel.tri_state(&filtered), TriState::None);
    }

    #[test]
    fn retain_visible_keeps_overlap() {
        let mut sel = BulkSelectionController::new();
        sel.toggle_all(&ids(0..4));
        sel.retain_visible(&ids(2..8));
        assert_eq!(sel.selected_ids().copied().collect::<Vec<_>>(), vec![2, 3]);
    }
}
