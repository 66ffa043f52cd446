//! The window-manager calls the toggler needs.

use crate::error::ProcessPathError;
use crate::model::{Rect, WindowHandle};

/// Native window enumeration, metadata and visibility primitives.
///
/// Every method is best-effort: calls against a handle that died since it
/// was obtained return a neutral value (empty title, `false`, `None`).
pub trait WindowSystem {
    /// All top-level windows, in OS z-order.
    fn top_level_windows(&self) -> Vec<WindowHandle>;

    fn is_window(&self, handle: WindowHandle) -> bool;

    fn is_enabled(&self, handle: WindowHandle) -> bool;

    fn is_visible(&self, handle: WindowHandle) -> bool;

    /// Empty string when the window has no title.
    fn title(&self, handle: WindowHandle) -> String;

    fn process_id(&self, handle: WindowHandle) -> u32;

    fn executable_path(&self, process_id: u32) -> Result<String, ProcessPathError>;

    /// Show in the restored ("normal") state, neither minimized nor maximized.
    fn show_normal(&self, handle: WindowHandle);

    fn hide(&self, handle: WindowHandle);

    /// The restored-state placement rectangle, stable across minimize/maximize.
    fn normal_placement(&self, handle: WindowHandle) -> Option<Rect>;
}
