//! The user-chosen set of windows the triggers act on.

use tracing::{debug, info};

use super::directory::{RefreshReport, WindowDirectory};
use super::system::WindowSystem;
use super::visibility::VisibilityController;
use crate::model::{Point, TrackedWindow, WindowHandle};

/// Ordered set of tracked windows, unique by handle.
#[derive(Debug, Default)]
pub struct TargetGroup {
    windows: Vec<TrackedWindow>,
}

impl TargetGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `window` unless its handle is already present.
    pub fn add(&mut self, window: TrackedWindow) -> bool {
        if self.contains(window.handle) {
            debug!(handle = %window.handle, "Already a target");
            return false;
        }
        info!(handle = %window.handle, title = window.title(), "Target added");
        self.windows.push(window);
        true
    }

    pub fn remove(&mut self, handle: WindowHandle) -> Option<TrackedWindow> {
        let index = self.windows.iter().position(|w| w.handle == handle)?;
        let removed = self.windows.remove(index);
        info!(%handle, "Target removed");
        Some(removed)
    }

    pub fn clear(&mut self) {
        if !self.windows.is_empty() {
            info!(count = self.windows.len(), "Targets cleared");
        }
        self.windows.clear();
    }

    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.windows.iter().any(|w| w.handle == handle)
    }

    pub fn get(&self, handle: WindowHandle) -> Option<&TrackedWindow> {
        self.windows.iter().find(|w| w.handle == handle)
    }

    pub fn get_mut(&mut self, handle: WindowHandle) -> Option<&mut TrackedWindow> {
        self.windows.iter_mut().find(|w| w.handle == handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedWindow> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Executable paths of all targets, in group order.
    pub fn executable_paths(&self) -> Vec<String> {
        self.windows
            .iter()
            .map(|w| w.executable_path.clone())
            .collect()
    }

    /// Flip every target independently of the others.
    pub fn toggle_all<S: WindowSystem>(&mut self, visibility: &VisibilityController<S>) {
        for window in &mut self.windows {
            visibility.toggle(window);
        }
    }

    /// Show every target whose cached state is hidden. Returns how many.
    pub fn show_hidden<S: WindowSystem>(&mut self, visibility: &VisibilityController<S>) -> usize {
        let mut shown = 0;
        for window in self.windows.iter_mut().filter(|w| !w.is_visible()) {
            visibility.show(window);
            shown += 1;
        }
        shown
    }

    /// Show targets under the pointer and hide the rest.
    ///
    /// Uses each window's `last_known_rect`; only issues a call when the
    /// cached state has to change.
    pub fn follow_pointer<S: WindowSystem>(
        &mut self,
        visibility: &VisibilityController<S>,
        point: Point,
    ) {
        for window in &mut self.windows {
            let inside = window.last_known_rect.contains(point);
            if inside && !window.is_visible() {
                visibility.show(window);
            } else if !inside && window.is_visible() {
                visibility.hide(window);
            }
        }
    }

    pub fn show<S: WindowSystem>(
        &mut self,
        visibility: &VisibilityController<S>,
        handle: WindowHandle,
    ) -> bool {
        match self.get_mut(handle) {
            Some(window) => {
                visibility.show(window);
                true
            }
            None => false,
        }
    }

    pub fn hide<S: WindowSystem>(
        &mut self,
        visibility: &VisibilityController<S>,
        handle: WindowHandle,
    ) -> bool {
        match self.get_mut(handle) {
            Some(window) => {
                visibility.hide(window);
                true
            }
            None => false,
        }
    }

    /// Drop dead targets and refresh titles.
    pub fn refresh<S: WindowSystem>(&mut self, directory: &WindowDirectory<S>) -> RefreshReport {
        directory.refresh(&mut self.windows)
    }

    /// Re-read every target's placement rectangle.
    pub fn refresh_rects<S: WindowSystem>(&mut self, visibility: &VisibilityController<S>) {
        for window in &mut self.windows {
            visibility.refresh_rect(window);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(raw: isize) -> TrackedWindow {
        TrackedWindow::new(WindowHandle(raw), format!("w{raw}"), 1, "app.exe", true)
    }

    #[test]
    fn add_is_unique_by_handle() {
        let mut group = TargetGroup::new();
        assert!(group.add(window(1)));
        assert!(!group.add(window(1)));
        assert!(group.add(window(2)));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut group = TargetGroup::new();
        for raw in 1..=3 {
            group.add(window(raw));
        }
        assert!(group.remove(WindowHandle(2)).is_some());
        assert!(group.remove(WindowHandle(2)).is_none());
        let handles: Vec<_> = group.iter().map(|w| w.handle).collect();
        assert_eq!(handles, vec![WindowHandle(1), WindowHandle(3)]);
    }

    #[test]
    fn executable_paths_follow_group_order() {
        let mut group = TargetGroup::new();
        let mut a = window(1);
        a.executable_path = "a.exe".into();
        let mut b = window(2);
        b.executable_path = "b.exe".into();
        group.add(a);
        group.add(b);
        assert_eq!(group.executable_paths(), vec!["a.exe", "b.exe"]);
        group.clear();
        assert!(group.is_empty());
    }
}
