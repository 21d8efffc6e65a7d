//! The roster table widget: checkbox column plus id/name/email/role.

use crate::state::TableController;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Checkbox mark for a checked row.
const CHECKED: &str = "[x]";
/// Checkbox mark for an unchecked row.
const UNCHECKED: &str = "[ ]";

/// Widest a name or email cell may render before truncation.
const MAX_CELL_WIDTH: usize = 40;

/// Table widget over the current page of the filtered view.
///
/// Reads everything through the [`TableController`] capability surface;
/// the cursor row (keyboard target) is view-local state passed in by the
/// event loop.
pub struct RosterTable<'a> {
    controller: &'a dyn TableController,
    cursor: usize,
}

impl<'a> RosterTable<'a> {
    /// Create the widget for one frame.
    pub fn new(controller: &'a dyn TableController, cursor: usize) -> Self {
        Self { controller, cursor }
    }
}

impl Widget for RosterTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page = self.controller.page();
        let selection = self.controller.selection();

        let header_mark = if self.controller.is_all_selected() {
            CHECKED
        } else {
            UNCHECKED
        };
        let header = Row::new(vec![
            Cell::from(header_mark),
            Cell::from("ID"),
            Cell::from("Name"),
            Cell::from("Email"),
            Cell::from("Role"),
        ])
        .style(styles::TABLE_HEADER);

        let rows: Vec<Row> = page
            .items
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let checked = selection.contains(&record.id);
                let mark = if checked { CHECKED } else { UNCHECKED };
                let mark_style = if checked {
                    styles::CHECKED_MARK
                } else {
                    Style::default()
                };
                let row = Row::new(vec![
                    Cell::from(mark).style(mark_style),
                    Cell::from(record.id.as_str().to_string()),
                    Cell::from(truncate_cell(&record.name, MAX_CELL_WIDTH)),
                    Cell::from(truncate_cell(&record.email, MAX_CELL_WIDTH)),
                    Cell::from(record.role.clone()),
                ]);
                if i == self.cursor {
                    row.style(styles::CURSOR_ROW)
                } else {
                    row
                }
            })
            .collect();

        let title = if page.items.is_empty() {
            " Roster (no matches) "
        } else {
            " Roster "
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(20),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

        let mut table_state = TableState::default();
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

/// Truncate a cell to a display width, appending an ellipsis when cut.
///
/// Width-aware rather than byte- or char-aware so wide (CJK) characters
/// do not overflow the column.
fn truncate_cell(text: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    text.to_string()
}
