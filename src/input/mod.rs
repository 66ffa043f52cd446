//! Input handling module.
//!
//! This module contains the OS-independent halves of the global input
//! sources:
//! - hotkeys.rs: [`HotkeyRegistry`] over a [`HotkeyBackend`]
//! - mouse_hook.rs: [`PointerEventHook`] over a [`PointerBackend`], with
//!   middle-click and left+right chord derivation
//!
//! Win32 backends live in `platform::windows::input`.

pub mod hotkeys;
pub mod mouse_hook;

pub use hotkeys::{HotkeyBackend, HotkeyDispatch, HotkeyRegistry};
pub use mouse_hook::{
    PointerBackend, PointerChordState, PointerDispatch, PointerEventHook, RawPointerEvent,
};
