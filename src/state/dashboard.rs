//! Root dashboard state and transitions.
//!
//! `DashboardState` is the single owner of all table state. Every user
//! intent is one total transition method: nothing here fails or panics,
//! missing ids are silent no-ops. The dataset is the single source of
//! truth; the filtered view is re-derived after every transition that can
//! affect it, so an edit or delete is never silently reverted by a later
//! search.

use crate::model::{UserId, UserRecord};
use crate::state::editor::EditorState;
use crate::state::filter::filter_records;
use crate::state::pagination::{self, PageView};
use crate::state::selection::SelectionSet;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// All state behind the admin table, mutated one event at a time.
///
/// # Invariants
///
/// - `current_page` is always in `[1, max(1, total_pages)]`; any transition
///   that shrinks the view clamps it.
/// - The selection only ever holds ids that were on the current page at the
///   time of the last selection action; it is cleared on page navigation,
///   query changes and after every mutation.
/// - `view` is always `filter_records(&records, &query)`.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The authoritative dataset, in fetch order.
    records: Vec<UserRecord>,

    /// Active search query, exactly as typed.
    query: String,

    /// Derived projection of `records` under `query`.
    view: Vec<UserRecord>,

    /// Current page, 1-indexed.
    current_page: usize,

    /// Rows per page.
    page_size: usize,

    /// Checked rows on the current page.
    selection: SelectionSet,

    /// Edit dialog buffer.
    editor: EditorState,
}

impl DashboardState {
    /// Create dashboard state over a loaded dataset.
    ///
    /// A `page_size` of 0 falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(records: Vec<UserRecord>, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        let view = records.clone();
        Self {
            records,
            query: String::new(),
            view,
            current_page: 1,
            page_size,
            selection: SelectionSet::new(),
            editor: EditorState::new(),
        }
    }

    // ===== Read surface =====

    /// The authoritative dataset.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// The filtered view.
    pub fn view(&self) -> &[UserRecord] {
        &self.view
    }

    /// The active query, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current page, 1-indexed.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total page count of the filtered view (0 when empty).
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.view.len(), self.page_size)
    }

    /// Slice of the filtered view for the current page, with metadata.
    pub fn page(&self) -> PageView<'_> {
        pagination::paginate(&self.view, self.current_page, self.page_size)
    }

    /// The checked rows.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether every row on the current page is checked.
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.page().items)
    }

    /// The edit dialog buffer.
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Mutable edit dialog buffer, for modal text input.
    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    // ===== Search =====

    /// Replace the query: re-derive the view, jump back to page 1 and drop
    /// the selection (a fresh result set starts at its first page).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.view = filter_records(&self.records, &self.query);
        self.current_page = 1;
        self.selection.clear();
    }

    /// Append one character to the query (live search keystroke).
    pub fn push_query_char(&mut self, ch: char) {
        let mut query = self.query.clone();
        query.push(ch);
        self.set_query(query);
    }

    /// Delete the last character of the query (live search backspace).
    pub fn pop_query_char(&mut self) {
        let mut query = self.query.clone();
        query.pop();
        self.set_query(query);
    }

    /// Clear the query, restoring the full dataset as the view.
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    // ===== Pagination =====

    /// Jump to a 1-indexed page. Out-of-range targets are silent no-ops;
    /// a valid click clears the selection, even when it lands on the same
    /// page.
    pub fn goto_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            self.selection.clear();
        }
    }

    /// Advance one page, saturating at the last.
    pub fn next_page(&mut self) {
        self.goto_page(self.current_page + 1);
    }

    /// Go back one page, saturating at the first.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.goto_page(self.current_page - 1);
        }
    }

    // ===== Selection =====

    /// Toggle one row's checkbox.
    pub fn toggle_row(&mut self, id: UserId, checked: bool) {
        self.selection.toggle(id, checked);
    }

    /// Select or clear every row on the current page.
    pub fn toggle_select_all(&mut self, checked: bool) {
        if checked {
            let items: Vec<UserRecord> = self.page().items.to_vec();
            self.selection.select_page(&items);
        } else {
            self.selection.clear();
        }
    }

    // ===== Mutation =====

    /// Delete one record by id.
    ///
    /// Removes the first match from the dataset (ids are assumed unique),
    /// re-derives the view and clamps the page. A missing id is a no-op
    /// that still clears the selection.
    pub fn delete_one(&mut self, id: &UserId) {
        if let Some(index) = self.records.iter().position(|r| &r.id == id) {
            self.records.remove(index);
        }
        self.selection.clear();
        self.refresh_view();
    }

    /// Delete every selected record. A no-op when nothing is selected;
    /// otherwise clears the selection and clamps the page afterwards.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let selected = self.selection.clone();
        self.records.retain(|r| !selected.contains(&r.id));
        self.selection.clear();
        self.refresh_view();
    }

    /// Open the edit dialog for a record by id. A missing id is a no-op.
    pub fn edit_open(&mut self, id: &UserId) {
        if let Some(record) = self.records.iter().find(|r| &r.id == id) {
            self.editor.open(record.clone());
        }
    }

    /// Save the edit dialog's draft.
    ///
    /// Replaces the matching dataset record in place (position preserved);
    /// a draft whose id is no longer present is silently discarded. The
    /// dialog closes regardless of outcome. The re-derived view may drop
    /// the edited record when it no longer matches the query.
    pub fn edit_save(&mut self) {
        if let Some(draft) = self.editor.take_draft() {
            if let Some(index) = self.records.iter().position(|r| r.id == draft.id) {
                self.records[index] = draft;
            }
            self.selection.clear();
            self.refresh_view();
        }
    }

    /// Close the edit dialog, discarding any unsaved edits.
    pub fn edit_close(&mut self) {
        self.editor.close();
    }

    // ===== Internal =====

    /// Re-derive the view from the dataset and clamp the page into
    /// `[1, max(1, total_pages)]`.
    fn refresh_view(&mut self) {
        self.view = filter_records(&self.records, &self.query);
        let total = self.total_pages();
        self.current_page = self.current_page.min(total.max(1));
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
