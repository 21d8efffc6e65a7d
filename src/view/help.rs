//! Help overlay widget displaying keyboard shortcuts.

use crate::view::styles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the help popup as a percentage of the screen.
const HELP_WIDTH_PERCENT: u16 = 60;
/// Height of the help popup as a percentage of the screen.
const HELP_HEIGHT_PERCENT: u16 = 80;

/// Render the help overlay centered on the screen.
///
/// Shortcuts are grouped by category; dismissed with Esc or ?.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_WIDTH_PERCENT, HELP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles::FOCUSED_BORDER),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    let category = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<12}"), key),
            Span::raw(desc),
        ])
    };

    vec![
        Line::from(Span::styled("Navigation", category)),
        entry("j/k ↓/↑", "Move row cursor"),
        entry("h/l n/p", "Previous / next page (also ←/→)"),
        entry("1-9", "Jump to page"),
        Line::default(),
        Line::from(Span::styled("Selection", category)),
        entry("Space", "Toggle row checkbox"),
        entry("a", "Select / clear whole page"),
        Line::default(),
        Line::from(Span::styled("Editing", category)),
        entry("e/Enter", "Edit the cursor row"),
        entry("d", "Delete the cursor row"),
        entry("D", "Delete all selected rows"),
        Line::default(),
        Line::from(Span::styled("Search", category)),
        entry("/ Ctrl+f", "Focus the search bar"),
        entry("Enter", "Keep query, back to table"),
        entry("Esc", "Clear query, back to table"),
        Line::default(),
        Line::from(Span::styled("Application", category)),
        entry("?", "This help"),
        entry("q Ctrl+c", "Quit"),
    ]
}
