//! Enumeration of top-level windows.

use std::rc::Rc;

use tracing::{debug, trace};

use super::system::WindowSystem;
use crate::error::ProcessPathError;
use crate::model::{ListPolicy, TrackedWindow, WindowHandle, PATH_ACCESS_DENIED, PATH_UNAVAILABLE};

/// What a [`WindowDirectory::refresh`] pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Entries dropped because their handle is no longer a window.
    pub removed: Vec<WindowHandle>,
    /// Surviving entries whose title changed.
    pub retitled: Vec<WindowHandle>,
}

/// Walks the OS window list and builds [`TrackedWindow`]s.
pub struct WindowDirectory<S: WindowSystem> {
    system: Rc<S>,
}

impl<S: WindowSystem> WindowDirectory<S> {
    pub fn new(system: Rc<S>) -> Self {
        Self { system }
    }

    /// One pass over all top-level windows, filtered by `policy`.
    pub fn enumerate_all(&self, policy: ListPolicy) -> Vec<TrackedWindow> {
        let sys = &*self.system;
        let mut windows = Vec::new();

        for handle in sys.top_level_windows() {
            if !sys.is_window(handle) {
                continue;
            }
            if !policy.include_disabled && !sys.is_enabled(handle) {
                continue;
            }
            let title = sys.title(handle);
            if title.is_empty() && !policy.include_untitled {
                continue;
            }
            let visible = sys.is_visible(handle);
            if !visible && !policy.include_invisible {
                continue;
            }

            let window = self.build(handle, title, visible);
            trace!(%handle, title = window.title(), "Enumerated");
            windows.push(window);
        }

        debug!(count = windows.len(), ?policy, "Enumerated top-level windows");
        windows
    }

    /// Describe a single window regardless of any list policy.
    pub fn describe(&self, handle: WindowHandle) -> TrackedWindow {
        let sys = &*self.system;
        self.build(handle, sys.title(handle), sys.is_visible(handle))
    }

    fn build(&self, handle: WindowHandle, title: String, visible: bool) -> TrackedWindow {
        let process_id = self.system.process_id(handle);
        let path = self.executable_path(process_id);
        let mut window = TrackedWindow::new(handle, title, process_id, path, visible);
        if let Some(rect) = self.system.normal_placement(handle) {
            window.last_known_rect = rect;
        }
        window
    }

    /// Drop entries whose window is gone and refresh surviving titles.
    ///
    /// Cached visibility is left alone: it tracks our own show/hide calls.
    pub fn refresh(&self, windows: &mut Vec<TrackedWindow>) -> RefreshReport {
        let sys = &*self.system;
        let mut report = RefreshReport::default();

        windows.retain(|w| {
            let alive = sys.is_window(w.handle);
            if !alive {
                report.removed.push(w.handle);
            }
            alive
        });

        for window in windows.iter_mut() {
            if window.set_title(sys.title(window.handle)) {
                report.retitled.push(window.handle);
            }
        }

        debug!(
            removed = report.removed.len(),
            retitled = report.retitled.len(),
            "Refreshed window list"
        );
        report
    }

    /// Executable path or a placeholder; never fails.
    fn executable_path(&self, process_id: u32) -> String {
        match self.system.executable_path(process_id) {
            Ok(path) => path,
            Err(ProcessPathError::AccessDenied) => PATH_ACCESS_DENIED.to_string(),
            Err(ProcessPathError::Unavailable) => PATH_UNAVAILABLE.to_string(),
        }
    }
}
