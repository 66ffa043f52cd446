//! The single place that shows and hides windows.

use std::rc::Rc;

use tracing::{debug, trace};

use super::system::WindowSystem;
use crate::model::{Rect, TrackedWindow};

/// Issues show/hide calls and keeps each window's cached flag in step.
pub struct VisibilityController<S: WindowSystem> {
    system: Rc<S>,
}

impl<S: WindowSystem> Clone for VisibilityController<S> {
    fn clone(&self) -> Self {
        Self {
            system: Rc::clone(&self.system),
        }
    }
}

impl<S: WindowSystem> VisibilityController<S> {
    pub fn new(system: Rc<S>) -> Self {
        Self { system }
    }

    pub fn show(&self, window: &mut TrackedWindow) {
        self.system.show_normal(window.handle);
        window.set_visible(true);
        trace!(handle = %window.handle, "Shown");
    }

    pub fn hide(&self, window: &mut TrackedWindow) {
        self.system.hide(window.handle);
        window.set_visible(false);
        trace!(handle = %window.handle, "Hidden");
    }

    /// Invert the cached state. Never asks the OS what the state is first.
    /// Returns the new cached state.
    pub fn toggle(&self, window: &mut TrackedWindow) -> bool {
        if window.is_visible() {
            self.hide(window);
        } else {
            self.show(window);
        }
        debug!(handle = %window.handle, visible = window.is_visible(), "Toggled");
        window.is_visible()
    }

    /// The window's restored-state placement rectangle.
    pub fn current_rect(&self, window: &TrackedWindow) -> Option<Rect> {
        self.system.normal_placement(window.handle)
    }

    /// Store [`current_rect`](Self::current_rect) as `last_known_rect`.
    /// Keeps the old rectangle if the query fails.
    pub fn refresh_rect(&self, window: &mut TrackedWindow) -> bool {
        match self.current_rect(window) {
            Some(rect) => {
                window.last_known_rect = rect;
                true
            }
            None => false,
        }
    }
}
