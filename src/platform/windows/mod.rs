//! Windows-specific implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - FFI helpers (handle, point and string conversions)
//! - `WindowSystem` over user32 and the process APIs
//! - Input backends (RegisterHotKey, WH_MOUSE_LL)
//! - The host window and the notification dispatcher

pub mod ffi;
pub mod handlers;
pub mod host;
pub mod input;
pub mod system;

pub use handlers::dispatch_notifications;
pub use host::create_host_window;
pub use input::{deliver_hotkey, Win32HotkeyBackend, Win32PointerBackend};
pub use system::Win32WindowSystem;
