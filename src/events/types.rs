//! Notifications from the core to the presentation layer.
//!
//! Pure Rust with no FFI dependencies, so list views can be driven (and
//! tested) without polling the core.

use crate::model::{HotkeyKind, WindowHandle};

/// Something the presentation layer should reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Registering a hotkey failed because the combination is taken.
    HotkeyInUse(HotkeyKind),

    /// A target window's title changed.
    TitleChanged { handle: WindowHandle, title: String },

    /// A target window's cached visibility changed.
    VisibilityChanged { handle: WindowHandle, visible: bool },

    TargetAdded(WindowHandle),

    /// Removed explicitly or dropped because the window is gone.
    TargetRemoved(WindowHandle),

    TargetsCleared,
}

impl Notification {
    /// True for notices the user must see (a dialog, not just a list update).
    pub fn needs_user_attention(&self) -> bool {
        matches!(self, Notification::HotkeyInUse(_))
    }

    /// Returns a human-readable description for logs and message boxes.
    pub fn description(&self) -> String {
        match self {
            Notification::HotkeyInUse(kind) => {
                format!("The hotkey to {} is already in use.", kind.description())
            }
            Notification::TitleChanged { handle, title } => {
                format!("Window {} is now titled {:?}", handle, title)
            }
            Notification::VisibilityChanged { handle, visible } => format!(
                "Window {} is now {}",
                handle,
                if *visible { "shown" } else { "hidden" }
            ),
            Notification::TargetAdded(handle) => format!("Window {} added to targets", handle),
            Notification::TargetRemoved(handle) => {
                format!("Window {} removed from targets", handle)
            }
            Notification::TargetsCleared => "Target list cleared".to_string(),
        }
    }
}
