//! Frontend abstraction layer
//!
//! Defines the `Frontend` trait the terminal frontend implements: event
//! polling, rendering and cleanup.

pub mod events;
pub mod tui;

use crate::core::{Action, AppCore};
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Separates rendering concerns from application logic
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, mouse, resize) converted to
    /// `FrontendEvent`. An empty list means nothing happened before the
    /// poll timeout.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Takes `&mut AppCore` because rendering clamps the bio scroll offset
    /// to the wrapped text height.
    fn render(&mut self, core: &mut AppCore) -> Result<()>;

    /// Map a mouse event to the action it triggers, if any
    fn mouse_action(&self, core: &AppCore, event: &FrontendEvent) -> Option<Action>;

    /// Restore the terminal before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in cells
    fn size(&self) -> (u16, u16);
}
