//! Roster admin dashboard (roster)
//!
//! TUI application for browsing and editing a user roster fetched from a
//! JSON endpoint. The table state machine (filtering, pagination, selection,
//! mutation) is a pure core in [`state`]; terminal I/O, the dataset load,
//! configuration and logging form the impure shell around it.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
