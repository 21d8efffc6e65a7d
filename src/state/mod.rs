//! Table state machine (pure).
//!
//! All state transitions are total functions testable without a terminal.

pub mod controller;
pub mod dashboard;
pub mod editor;
pub mod filter;
pub mod pagination;
pub mod selection;

// Re-export for convenience
pub use controller::TableController;
pub use dashboard::DashboardState;
pub use editor::{EditField, EditorState};
pub use filter::{filter_records, record_matches};
pub use pagination::{page_numbers, paginate, total_pages, PageView};
pub use selection::SelectionSet;
