//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised while creating or changing a global hotkey.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotkeyError {
    #[error("a hotkey binding needs a key, got none")]
    InvalidBinding,

    #[error("a hotkey binding takes at most {max} modifiers, got {got}")]
    TooManyModifiers { got: usize, max: usize },

    #[error("cannot attach to the host window message stream: {0}")]
    HookAttachFailed(String),
}

/// Errors raised while installing the low-level mouse hook.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookError {
    #[error("a low-level mouse hook is already installed in this process")]
    AlreadyInstalled,

    #[error("failed to install low-level mouse hook: {0}")]
    InstallFailed(String),
}

/// Why the executable path of a window's owning process is unknown.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProcessPathError {
    #[error("process path unavailable")]
    Unavailable,

    #[error("access to process denied")]
    AccessDenied,
}

/// A persisted modifier or key selection that cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingParseError {
    #[error("unknown modifier key: {0:?}")]
    UnknownModifier(String),

    #[error("unknown key: {0:?}")]
    UnknownKey(String),
}

/// Settings persistence failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Startup failures of the application as a whole.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Hotkey(#[from] HotkeyError),

    #[error(transparent)]
    Hook(#[from] HookError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("platform error: {0}")]
    Platform(String),
}
