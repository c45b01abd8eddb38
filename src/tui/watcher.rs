//! Background redraw on terminal resize.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, Scope, ScopedJoinHandle};
use std::time::Duration;

use super::screen::{Screen, lock};
use super::surface::Surface;
use crate::Result;

/// Polls the terminal size and redraws the published snapshot when it changes
///
/// The thread lives in a [`thread::scope`] so it can borrow the screen. It stops
/// when the watcher is dropped, or on the first terminal error.
pub struct ResizeWatcher<'scope> {
    stopped: Arc<AtomicBool>,
    handle: Option<ScopedJoinHandle<'scope, ()>>,
}

impl<'scope> ResizeWatcher<'scope> {
    /// Starts polling `screen` every `period`
    pub fn spawn<'env, S>(
        scope: &'scope Scope<'scope, 'env>,
        screen: &'scope Mutex<Screen<S>>,
        period: Duration,
    ) -> Result<Self>
    where
        S: Surface + Send,
    {
        let stopped = Arc::new(AtomicBool::new(false));
        let stopped_clone = stopped.clone();
        let handle = thread::Builder::new()
            .name("fzpick-resize".to_string())
            .spawn_scoped(scope, move || {
                debug!("resize watcher started, period {period:?}");
                while !stopped_clone.load(Ordering::Relaxed) {
                    thread::park_timeout(period);
                    if stopped_clone.load(Ordering::Relaxed) {
                        break;
                    }
                    if let Err(err) = lock(screen).redraw_if_resized() {
                        warn!("resize watcher: {err}");
                        break;
                    }
                }
                debug!("resize watcher stopped");
            })?;
        Ok(Self {
            stopped,
            handle: Some(handle),
        })
    }

    /// Stops the thread and waits for it
    pub fn stop(&mut self) {
        self.stopped.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl Drop for ResizeWatcher<'_> {
    fn drop(&mut self) {
        self.stop();
    }
}
