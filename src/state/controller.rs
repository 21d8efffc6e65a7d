//! The capability surface the view layer holds on the table state.
//!
//! Instead of threading individual callbacks through the widget tree, view
//! components hold one reference to a `TableController` and express user
//! intents against it. `DashboardState` is the production implementation;
//! tests can substitute their own.

use crate::model::{UserId, UserRecord};
use crate::state::dashboard::DashboardState;
use crate::state::editor::EditorState;
use crate::state::pagination::PageView;
use crate::state::selection::SelectionSet;

/// Read surface and intent sink for the admin table.
pub trait TableController {
    // ===== Read surface =====

    /// The current page's record slice with page metadata.
    fn page(&self) -> PageView<'_>;

    /// Current page, 1-indexed.
    fn current_page(&self) -> usize;

    /// The active search query.
    fn query(&self) -> &str;

    /// The full filtered view (for counts in the footer).
    fn view(&self) -> &[UserRecord];

    /// The checked rows.
    fn selection(&self) -> &SelectionSet;

    /// Whether every row on the current page is checked.
    fn is_all_selected(&self) -> bool;

    /// The edit dialog buffer.
    fn editor(&self) -> &EditorState;

    // ===== Intents =====

    /// The search text changed.
    fn search_changed(&mut self, query: String);

    /// A page number was activated.
    fn page_clicked(&mut self, page: usize);

    /// A row checkbox was toggled.
    fn row_toggled(&mut self, id: UserId, checked: bool);

    /// The select-all checkbox was toggled.
    fn select_all_toggled(&mut self, checked: bool);

    /// A single row's delete action fired.
    fn delete_clicked(&mut self, id: UserId);

    /// The bulk delete action fired.
    fn delete_selected_clicked(&mut self);

    /// A row's edit action fired.
    fn edit_clicked(&mut self, id: UserId);

    /// The edit dialog's save action fired.
    fn edit_save_clicked(&mut self);

    /// The edit dialog was cancelled.
    fn edit_cancel_clicked(&mut self);
}

impl TableController for DashboardState {
    fn page(&self) -> PageView<'_> {
        DashboardState::page(self)
    }

    fn current_page(&self) -> usize {
        DashboardState::current_page(self)
    }

    fn query(&self) -> &str {
        DashboardState::query(self)
    }

    fn view(&self) -> &[UserRecord] {
        DashboardState::view(self)
    }

    fn selection(&self) -> &SelectionSet {
        DashboardState::selection(self)
    }

    fn is_all_selected(&self) -> bool {
        DashboardState::is_all_selected(self)
    }

    fn editor(&self) -> &EditorState {
        DashboardState::editor(self)
    }

    fn search_changed(&mut self, query: String) {
        self.set_query(query);
    }

    fn page_clicked(&mut self, page: usize) {
        self.goto_page(page);
    }

    fn row_toggled(&mut self, id: UserId, checked: bool) {
        self.toggle_row(id, checked);
    }

    fn select_all_toggled(&mut self, checked: bool) {
        self.toggle_select_all(checked);
    }

    fn delete_clicked(&mut self, id: UserId) {
        self.delete_one(&id);
    }

    fn delete_selected_clicked(&mut self) {
        self.delete_selected();
    }

    fn edit_clicked(&mut self, id: UserId) {
        self.edit_open(&id);
    }

    fn edit_save_clicked(&mut self) {
        self.edit_save();
    }

    fn edit_cancel_clicked(&mut self) {
        self.edit_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<UserRecord> {
        (1..=12)
            .map(|i| UserRecord {
                id: UserId::new(i.to_string()).expect("test id"),
                name: format!("User {i}"),
                email: format!("u{i}@example.com"),
                role: "member".to_string(),
            })
            .collect()
    }

    /// Exercise the trait object the way the view layer does.
    #[test]
    fn intents_flow_through_a_dyn_controller() {
        let mut state = DashboardState::new(roster(), 10);
        let controller: &mut dyn TableController = &mut state;

        controller.search_changed("member".to_string());
        assert_eq!(controller.view().len(), 12);

        controller.page_clicked(2);
        assert_eq!(controller.current_page(), 2);
        assert_eq!(controller.page().items.len(), 2);

        controller.select_all_toggled(true);
        assert!(controller.is_all_selected());

        controller.delete_selected_clicked();
        assert_eq!(controller.view().len(), 10);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn edit_intents_round_trip() {
        let mut state = DashboardState::new(roster(), 10);
        let controller: &mut dyn TableController = &mut state;

        let target = UserId::new("4").expect("test id");
        controller.edit_clicked(target.clone());
        assert!(controller.editor().is_open());

        controller.edit_cancel_clicked();
        assert!(!controller.editor().is_open());

        controller.edit_clicked(target);
        controller.edit_save_clicked();
        assert!(!controller.editor().is_open());
    }
}
