//! Edit dialog overlay for the record under the cursor.

use crate::state::{EditField, EditorState};
use crate::view::styles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the modal as a percentage of the screen.
const MODAL_WIDTH_PERCENT: u16 = 60;
/// Fixed modal height: borders, three fields, id line, blank, hint.
const MODAL_HEIGHT: u16 = 9;

/// Render the edit dialog centered on the screen.
///
/// Does nothing while the editor is closed.
pub fn render_edit_modal(frame: &mut Frame, editor: &EditorState) {
    let Some(draft) = editor.draft() else {
        return;
    };

    let area = frame.area();
    let popup_area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT, area);

    frame.render_widget(Clear, popup_area);

    let field_line = |label: &str, value: &str, field: EditField| {
        let style = if editor.field() == field {
            styles::FOCUSED_FIELD
        } else {
            Style::default()
        };
        let cursor = if editor.field() == field { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{label:>6}: "), style),
            Span::raw(format!("{value}{cursor}")),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("    id: {}", draft.id),
            styles::MUTED_TEXT,
        )),
        field_line("name", &draft.name, EditField::Name),
        field_line("email", &draft.email, EditField::Email),
        field_line("role", &draft.role, EditField::Role),
        Line::default(),
        Line::from(Span::styled(
            "Tab: next field · Enter: save · Esc: cancel",
            styles::MUTED_TEXT,
        ))
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Edit record ")
            .borders(Borders::ALL)
            .border_style(styles::FOCUSED_BORDER),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Centered rect with a percentage width and a fixed height.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = height.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}
