//! Core application logic
//!
//! Tab selection, page routing, actions and keybinds.
//! NO imports from frontend/ or rendering code.
//! Core updates its own state, frontends read and render.

pub mod actions;
pub mod app_core;
pub mod input_router;
pub mod router;
pub mod shell;
pub mod state;

pub use actions::Action;
pub use app_core::{AppCore, StatusMessage};
pub use router::Page;
pub use state::Selection;
