//! Search bar widget.

use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar rendering the live query.
///
/// While focused, a block cursor is drawn after the query (editing always
/// happens at the end of the line). When idle, the bar shows either the
/// active query or a key hint.
pub struct SearchInput<'a> {
    query: &'a str,
    focused: bool,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(query: &'a str, focused: bool) -> Self {
        Self { query, focused }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.focused {
            Line::from(vec![
                Span::raw(self.query.to_string()),
                Span::styled(
                    " ",
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else if self.query.is_empty() {
            Line::from(Span::styled(
                "Press / to search by id, name, email or role",
                styles::MUTED_TEXT,
            ))
        } else {
            Line::from(self.query.to_string())
        };

        let block = if self.focused {
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(styles::FOCUSED_BORDER)
        } else {
            Block::default().borders(Borders::ALL).title(" Search ")
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
