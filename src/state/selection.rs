//! Selection tracker: the set of record ids checked for bulk action.
//!
//! Selection is scoped to the current page: select-all captures exactly the
//! visible ids (a short last page yields a short selection, never padded),
//! and "all selected" means set-equality with the page's ids.

use crate::model::{UserId, UserRecord};
use std::collections::HashSet;

/// Set of record identifiers currently checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<UserId>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove one id. Idempotent: re-checking a checked row or
    /// un-checking an unchecked one is a no-op.
    pub fn toggle(&mut self, id: UserId, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Replace the selection with exactly the ids on the given page.
    ///
    /// On a partial last page this selects fewer than `page_size` rows;
    /// the selection is never padded past the visible items.
    pub fn select_page(&mut self, page_items: &[UserRecord]) {
        self.ids = page_items.iter().map(|r| r.id.clone()).collect();
    }

    /// Clear the selection entirely.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether the selection equals the given page's id set.
    ///
    /// False for an empty page: there is nothing to have selected.
    pub fn is_all_selected(&self, page_items: &[UserRecord]) -> bool {
        if page_items.is_empty() {
            return false;
        }
        let page_ids: HashSet<&UserId> = page_items.iter().map(|r| &r.id).collect();
        self.ids.len() == page_ids.len() && self.ids.iter().all(|id| page_ids.contains(id))
    }

    /// Whether the given id is checked.
    pub fn contains(&self, id: &UserId) -> bool {
        self.ids.contains(id)
    }

    /// Number of checked rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the checked ids (arbitrary order).
    pub fn ids(&self) -> impl Iterator<Item = &UserId> {
        self.ids.iter()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
