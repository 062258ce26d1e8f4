//! TUI Frontend (ratatui-based)
//!
//! Implements the Frontend trait using ratatui for terminal rendering and
//! crossterm for event handling.

pub mod app;
pub mod glyphs;
pub mod layout;
pub mod link_list;
pub mod pages;
pub mod tab_bar;

pub use app::TuiFrontend;
