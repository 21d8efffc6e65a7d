//! Shared styling constants for the dashboard widgets.

use ratatui::style::{Color, Modifier, Style};

/// Table header row.
pub const TABLE_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// The row under the keyboard cursor.
pub const CURSOR_ROW: Style = Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD);

/// A checked row's checkbox mark.
pub const CHECKED_MARK: Style = Style::new().fg(Color::Green);

/// Dimmed hints and secondary text.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// The active page number in the footer.
pub const ACTIVE_PAGE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

/// The field currently receiving input in the edit modal.
pub const FOCUSED_FIELD: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Border of the pane that has keyboard focus.
pub const FOCUSED_BORDER: Style = Style::new().fg(Color::Cyan);
