//! The surface together with the state it currently shows.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::render::Renderer;
use super::state::SelectionState;
use super::surface::Surface;
use super::viewport::item_rows;
use crate::Result;

/// A surface, its renderer and the last published snapshot
///
/// The controller and the resize watcher share it behind a [`Mutex`], so a
/// frame is always drawn from one complete snapshot.
pub struct Screen<S> {
    surface: S,
    renderer: Renderer,
    snapshot: Option<Arc<SelectionState>>,
}

impl<S: Surface> Screen<S> {
    /// A screen that shows nothing until the first [`Screen::publish`]
    pub fn new(surface: S, renderer: Renderer) -> Self {
        Self {
            surface,
            renderer,
            snapshot: None,
        }
    }

    /// Swaps in a new snapshot and draws it
    pub fn publish(&mut self, snapshot: Arc<SelectionState>) -> Result<()> {
        self.snapshot = Some(snapshot);
        self.redraw()
    }

    /// Draws the current snapshot again
    pub fn redraw(&mut self) -> Result<()> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };
        self.renderer.render(&mut self.surface, snapshot)
    }

    /// Redraws when the surface changed size, returns whether it did
    pub fn redraw_if_resized(&mut self) -> Result<bool> {
        if !self.surface.poll_resize()? {
            return Ok(false);
        }
        self.redraw()?;
        Ok(true)
    }

    /// Rows moved by one page-up or page-down
    pub fn page_size(&self) -> Result<usize> {
        let (rows, _) = self.surface.size()?;
        Ok(item_rows(rows))
    }

    /// The last published snapshot
    pub fn snapshot(&self) -> Option<&Arc<SelectionState>> {
        self.snapshot.as_ref()
    }

    /// The renderer, with the scroll position of the last frame
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The underlying surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The underlying surface, mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Locks a shared screen
///
/// A panic while drawing leaves at worst a stale frame, so a poisoned lock is still usable.
pub fn lock<S>(screen: &Mutex<Screen<S>>) -> MutexGuard<'_, Screen<S>> {
    screen.lock().unwrap_or_else(PoisonError::into_inner)
}
