//! Data layer - Pure state without UI coupling
//!
//! Holds the screen catalogue and the fixed portfolio content as plain data.
//! NO imports from frontend/ or any rendering code.
//! Frontends read from these structures to render.

pub mod portfolio;
pub mod screen;

pub use portfolio::*;
pub use screen::*;
