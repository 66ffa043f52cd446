//! Configuration constants and default values.
//!
//! This module contains hotkey ids, default bindings, placeholder strings
//! and settings file locations.

// === Hotkey IDs ===

/// System id of the "toggle this application's window" hotkey.
pub const HOTKEY_SELF: i32 = 1;

/// System id of the "toggle target group" hotkey.
pub const HOTKEY_TARGETS: i32 = 2;

// === Native hotkey modifier flags ===

pub const NATIVE_MOD_ALT: u32 = 0x0001;
pub const NATIVE_MOD_CONTROL: u32 = 0x0002;
pub const NATIVE_MOD_SHIFT: u32 = 0x0004;
pub const NATIVE_MOD_WIN: u32 = 0x0008;

/// Suppresses repeated notifications while the key is held.
pub const NATIVE_MOD_NOREPEAT: u32 = 0x4000;

// === Default bindings ===

/// Default modifier selections for the target group hotkey.
pub const DEFAULT_TARGET_MODIFIERS: [&str; 3] = ["Control", "Alt", "None"];

/// Default key for the target group hotkey.
pub const DEFAULT_TARGET_KEY: &str = "H";

/// Default modifier selections for the self hotkey.
pub const DEFAULT_SELF_MODIFIERS: [&str; 3] = ["Control", "Alt", "None"];

/// Default key for the self hotkey.
pub const DEFAULT_SELF_KEY: &str = "W";

/// Number of modifier pickers (and persisted modifier fields) per hotkey.
pub const MAX_MODIFIER_SELECTIONS: usize = 3;

/// Selection string meaning "no modifier" / "no key".
pub const SELECTION_NONE: &str = "None";

// === Process path placeholders ===

/// Shown when the owning process path cannot be resolved.
pub const PATH_UNAVAILABLE: &str = "<unavailable>";

/// Shown when the OS refuses to open the owning process.
pub const PATH_ACCESS_DENIED: &str = "<access denied>";

// === Settings storage ===

/// Directory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "WindowToggler";

/// Settings file name.
pub const CONFIG_FILE_NAME: &str = "settings.json";

// === Host window ===

/// Window class and title of the host window.
pub const HOST_CLASS_NAME: &str = "WindowTogglerHost";
pub const HOST_WINDOW_TITLE: &str = "Window Toggler";
