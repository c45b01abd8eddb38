//! Terminal UI components and rendering.
//!
//! This module provides the interactive half of the picker: the selection
//! controller, its state, the viewport math, the renderer and the terminal
//! backend it draws on.

pub use app::{App, Status};
pub use backend::{CrosstermKeys, DefaultBackend, Tui};
pub use render::{Draw, Renderer};
pub use screen::Screen;
pub use state::SelectionState;
pub use surface::{KeySource, Surface};
pub use viewport::{Viewport, Window};
pub use watcher::ResizeWatcher;

mod app;
mod backend;
/// Event handling and action definitions
pub mod event;
mod render;
pub mod screen;
mod state;
mod surface;
mod util;
pub mod viewport;
mod watcher;
