//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent while the table has focus, not specific
/// keys. The mapping from `crossterm::event::KeyEvent` to `KeyAction` is
/// handled by `config::KeyBindings`. Text input inside the search bar and
/// the edit modal is handled mode-locally and never goes through bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up within the current page. Default: k/↑
    CursorUp,
    /// Move the row cursor down within the current page. Default: j/↓
    CursorDown,

    // Pagination
    /// Go to the previous page. Default: h/←
    PrevPage,
    /// Go to the next page. Default: l/→
    NextPage,
    /// Jump to a specific 1-indexed page. Field: page number (1-9)
    GotoPage(usize),

    // Selection
    /// Toggle the checkbox of the cursor row. Default: Space
    ToggleSelect,
    /// Toggle select-all for the current page. Default: a
    ToggleSelectAll,

    // Mutation
    /// Delete the cursor row. Default: d
    DeleteRow,
    /// Delete every selected row. Default: D/Shift+d
    DeleteSelected,
    /// Open the edit modal for the cursor row. Default: e/Enter
    EditRow,

    // Search
    /// Focus the search bar. Default: //Ctrl+f
    StartSearch,

    // Application
    /// Show the help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
