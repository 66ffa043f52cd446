//! Input backends for Windows (hotkeys, low-level mouse hook).

pub mod hotkeys;
pub mod mouse_hook;

pub use hotkeys::{deliver_hotkey, Win32HotkeyBackend};
pub use mouse_hook::Win32PointerBackend;
