//! Selection and edit-mode state.
//!
//! At most one item is selected. Any number of items may be in edit mode
//! (showing their resize/rotate/delete handles); edit mode is entered one
//! item at a time as items are created and left by every item at once on
//! commit.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashSet;

use crate::item::ItemId;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<ItemId>,
    editing: HashSet<ItemId>,
}

impl Selection {
    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    pub fn select(&mut self, id: ItemId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Select `id` unless `was_selected`, in which case deselect.
    pub fn toggle_from(&mut self, id: ItemId, was_selected: bool) {
        self.selected = if was_selected { None } else { Some(id) };
    }

    #[must_use]
    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing.contains(&id)
    }

    /// Ids currently in edit mode, ascending.
    #[must_use]
    pub fn editing_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.editing.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn editing_count(&self) -> usize {
        self.editing.len()
    }

    /// A newly created item enters edit mode and becomes the selection.
    pub fn enter_new(&mut self, id: ItemId) {
        self.editing.insert(id);
        self.selected = Some(id);
    }

    /// Leave edit mode for every item and clear the selection.
    pub fn commit(&mut self) {
        self.editing.clear();
        self.selected = None;
    }

    /// Drop every reference to a removed item. Returns whether the
    /// selection changed.
    pub fn forget(&mut self, id: ItemId) -> bool {
        self.editing.remove(&id);
        if self.selected == Some(id) {
            self.selected = None;
            return true;
        }
        false
    }
}
