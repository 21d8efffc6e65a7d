//! TUI rendering and terminal management (impure shell)

mod edit_modal;
mod help;
mod pagination_bar;
mod search_input;
mod styles;
mod table;

pub use edit_modal::render_edit_modal;
pub use help::render_help_overlay;
pub use pagination_bar::PaginationBar;
pub use search_input::SearchInput;
pub use table::RosterTable;

use crate::config::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{DashboardState, TableController};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io_err) => AppError::Terminal(io_err),
        }
    }
}

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// Table pane: keybinding dispatch is active.
    Table,
    /// Search bar: character input edits the query live.
    Search,
    /// Edit dialog: character input edits the focused draft field.
    Edit,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: DashboardState,
    /// Row cursor within the current page (view-local, not domain state).
    cursor: usize,
    focus: Focus,
    help_visible: bool,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(state: DashboardState) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state,
            cursor: 0,
            focus: Focus::Table,
            help_visible: false,
            key_bindings: KeyBindings::default(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input
    /// events; idle polling consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        // Initial render so the screen has content immediately
        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, regardless of focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay captures every key; any of Esc/?/q closes it
        if self.help_visible {
            self.help_visible = false;
            return false;
        }

        match self.focus {
            Focus::Search => {
                self.handle_search_key(key);
                false
            }
            Focus::Edit => {
                self.handle_edit_key(key);
                false
            }
            Focus::Table => self.handle_table_key(key),
        }
    }

    /// Keys while the search bar is focused. Every edit refilters live.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.push_query_char(ch);
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                self.state.pop_query_char();
                self.cursor = 0;
            }
            KeyCode::Enter => {
                // Keep the query, hand focus back to the table
                self.focus = Focus::Table;
                self.clamp_cursor();
            }
            KeyCode::Esc => {
                self.state.clear_query();
                self.focus = Focus::Table;
                self.cursor = 0;
            }
            _ => {}
        }
    }

    /// Keys while the edit dialog is open.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.editor_mut().focus_next(),
            KeyCode::BackTab => self.state.editor_mut().focus_prev(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.editor_mut().input_char(ch);
            }
            KeyCode::Backspace => self.state.editor_mut().backspace(),
            KeyCode::Enter => {
                self.state.edit_save();
                self.focus = Focus::Table;
                self.clamp_cursor();
            }
            KeyCode::Esc => {
                self.state.edit_close();
                self.focus = Focus::Table;
            }
            _ => {}
        }
    }

    /// Keybinding dispatch while the table has focus.
    ///
    /// Returns true if app should quit.
    fn handle_table_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,

            KeyAction::CursorDown => {
                let rows = self.state.page().items.len();
                if rows > 0 && self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }
            KeyAction::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }

            KeyAction::NextPage => {
                self.state.next_page();
                self.cursor = 0;
            }
            KeyAction::PrevPage => {
                self.state.prev_page();
                self.cursor = 0;
            }
            KeyAction::GotoPage(number) => {
                self.state.page_clicked(number);
                self.cursor = 0;
            }

            KeyAction::ToggleSelect => {
                if let Some(id) = self.cursor_id() {
                    let checked = !self.state.selection().contains(&id);
                    self.state.row_toggled(id, checked);
                }
            }
            KeyAction::ToggleSelectAll => {
                let checked = !self.state.is_all_selected();
                self.state.select_all_toggled(checked);
            }

            KeyAction::DeleteRow => {
                if let Some(id) = self.cursor_id() {
                    self.state.delete_clicked(id);
                    self.clamp_cursor();
                }
            }
            KeyAction::DeleteSelected => {
                self.state.delete_selected_clicked();
                self.clamp_cursor();
            }
            KeyAction::EditRow => {
                if let Some(id) = self.cursor_id() {
                    self.state.edit_clicked(id);
                    if self.state.editor().is_open() {
                        self.focus = Focus::Edit;
                    }
                }
            }

            KeyAction::StartSearch => {
                self.focus = Focus::Search;
            }
            KeyAction::Help => {
                self.help_visible = true;
            }
        }

        false
    }

    /// Id of the record under the cursor, if any.
    fn cursor_id(&self) -> Option<crate::model::UserId> {
        self.state
            .page()
            .items
            .get(self.cursor)
            .map(|record| record.id.clone())
    }

    /// Keep the cursor inside the (possibly shrunk) page.
    fn clamp_cursor(&mut self) {
        let rows = self.state.page().items.len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let cursor = self.cursor;
        let focus = self.focus;
        let help_visible = self.help_visible;

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(4),
                    Constraint::Length(3),
                ])
                .split(frame.area());

            let search = SearchInput::new(state.query(), focus == Focus::Search);
            frame.render_widget(search, chunks[0]);

            let table = RosterTable::new(state, cursor);
            frame.render_widget(table, chunks[1]);

            let footer = PaginationBar::new(state);
            frame.render_widget(footer, chunks[2]);

            if focus == Focus::Edit {
                render_edit_modal(frame, state.editor());
            }
            if help_visible {
                render_help_overlay(frame);
            }
        })?;

        Ok(())
    }
}

/// Initialize and run the TUI application over an already-loaded roster
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_dashboard(state: DashboardState) -> Result<(), TuiError> {
    let mut app = TuiApp::new(state)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{UserId, UserRecord};
    use ratatui::backend::TestBackend;

    fn roster(n: usize) -> Vec<UserRecord> {
        (1..=n)
            .map(|i| UserRecord {
                id: UserId::new(i.to_string()).expect("test id"),
                name: format!("User {i}"),
                email: format!("user{i}@example.com"),
                role: if i % 3 == 0 { "admin" } else { "member" }.to_string(),
            })
            .collect()
    }

    fn create_test_app(records: Vec<UserRecord>) -> TuiApp<TestBackend> {
        let backend = TestBackend::new(80, 24);
        let terminal = Terminal::new(backend).unwrap();
        TuiApp {
            terminal,
            state: DashboardState::new(records, 10),
            cursor: 0,
            focus: Focus::Table,
            help_visible: false,
            key_bindings: KeyBindings::default(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app(roster(5));
        assert!(app.handle_key(key(KeyCode::Char('q'))), "'q' should quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app(roster(5));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c), "Ctrl+C should quit");
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app(roster(25));
        assert!(app.draw().is_ok(), "Drawing should succeed");
    }

    #[test]
    fn cursor_moves_down_and_clamps_at_page_end() {
        let mut app = create_test_app(roster(3));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(app.cursor, 2);
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn page_change_resets_cursor() {
        let mut app = create_test_app(roster(25));
        app.cursor = 7;
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.state.current_page(), 2);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn space_toggles_the_cursor_row() {
        let mut app = create_test_app(roster(5));
        app.cursor = 2;
        app.handle_key(key(KeyCode::Char(' ')));
        let id = UserId::new("3").unwrap();
        assert!(app.state.selection().contains(&id));

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.state.selection().contains(&id));
    }

    #[test]
    fn select_all_then_bulk_delete_empties_page() {
        let mut app = create_test_app(roster(5));
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.state.is_all_selected());

        let shift_d = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        app.handle_key(shift_d);
        assert!(app.state.view().is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn slash_focuses_search_and_typing_filters_live() {
        let mut app = create_test_app(roster(25));
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.focus, Focus::Search);

        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.state.query(), "ad");
        assert!(app.state.view().iter().all(|r| r.role == "admin"));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Table);
        assert_eq!(app.state.query(), "ad");
    }

    #[test]
    fn escape_in_search_clears_query() {
        let mut app = create_test_app(roster(25));
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Table);
        assert_eq!(app.state.query(), "");
        assert_eq!(app.state.view().len(), 25);
    }

    #[test]
    fn edit_flow_saves_draft_on_enter() {
        let mut app = create_test_app(roster(5));
        app.cursor = 0;
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.focus, Focus::Edit);

        // Name field is focused first; append a character and save
        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.focus, Focus::Table);
        assert!(!app.state.editor().is_open());
        assert_eq!(app.state.records()[0].name, "User 1!");
    }

    #[test]
    fn edit_escape_discards_draft() {
        let mut app = create_test_app(roster(5));
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.focus, Focus::Table);
        assert_eq!(app.state.records()[0].name, "User 1");
    }

    #[test]
    fn delete_row_clamps_cursor() {
        let mut app = create_test_app(roster(3));
        app.cursor = 2;
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.state.view().len(), 2);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn help_overlay_opens_and_any_key_closes() {
        let mut app = create_test_app(roster(5));
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        app.handle_key(question);
        assert!(app.help_visible);

        app.handle_key(key(KeyCode::Char('j')));
        assert!(!app.help_visible);
        assert_eq!(app.cursor, 0, "Key closing help must not also act");
    }

    #[test]
    fn goto_page_via_digit_key() {
        let mut app = create_test_app(roster(25));
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.state.current_page(), 3);

        // Out-of-range digit is a no-op
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.state.current_page(), 3);
    }
}
