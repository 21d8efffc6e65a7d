//! Footer widget: page links, record counts and selection summary.

use crate::state::TableController;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Footer bar with numbered page links and counts.
///
/// An empty view has zero pages; the bar then renders counts only and no
/// page links.
pub struct PaginationBar<'a> {
    controller: &'a dyn TableController,
}

impl<'a> PaginationBar<'a> {
    /// Create the widget for one frame.
    pub fn new(controller: &'a dyn TableController) -> Self {
        Self { controller }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page = self.controller.page();
        let current = self.controller.current_page();
        let selected = self.controller.selection().len();
        let total_records = self.controller.view().len();

        let mut spans: Vec<Span> = Vec::new();
        for number in &page.page_numbers {
            let label = format!(" {number} ");
            if *number == current {
                spans.push(Span::styled(label, styles::ACTIVE_PAGE));
            } else {
                spans.push(Span::raw(label));
            }
        }

        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{total_records} records"),
            styles::MUTED_TEXT,
        ));
        if selected > 0 {
            spans.push(Span::styled(
                format!(" · {selected} selected (D deletes)"),
                styles::CHECKED_MARK,
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
