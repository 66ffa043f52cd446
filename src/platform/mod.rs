//! Platform-specific implementations.
//!
//! Only Windows is supported. Its submodule implements the core's OS traits
//! (`WindowSystem`, `HotkeyBackend`, `PointerBackend`) plus the host window.
//! `wide` holds the host-independent buffer handling those calls share.

pub mod wide;

#[cfg(target_os = "windows")]
pub mod windows;
