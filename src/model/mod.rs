//! Application domain model.
//!
//! This module contains pure data types (no FFI dependencies): windows,
//! rectangles, hotkey combinations, trigger modes and constants.

pub mod constants;
pub mod hotkey;
pub mod modes;
pub mod window;

pub use constants::*;
pub use hotkey::{HotkeyBinding, Key, Modifiers};
pub use modes::{HotkeyKind, ListPolicy, TriggerMode};
pub use window::{Point, Rect, TrackedWindow, WindowChange, WindowHandle};
