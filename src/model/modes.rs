//! Trigger modes and list filtering policy.

use std::fmt;

/// The two logical hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyKind {
    /// Toggles every window in the target group.
    Targets,
    /// Toggles the application's own host window.
    SelfWindow,
}

impl HotkeyKind {
    pub fn description(&self) -> &'static str {
        match self {
            HotkeyKind::Targets => "toggle target windows",
            HotkeyKind::SelfWindow => "toggle this window",
        }
    }
}

/// Independently switchable triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerMode {
    Hotkey,
    MiddleClick,
    Chord,
    PointerPosition,
    SelfHotkey,
}

impl TriggerMode {
    pub const ALL: [TriggerMode; 5] = [
        TriggerMode::Hotkey,
        TriggerMode::MiddleClick,
        TriggerMode::Chord,
        TriggerMode::PointerPosition,
        TriggerMode::SelfHotkey,
    ];

    /// The hotkey behind this mode, if it is a keyboard mode.
    pub fn hotkey(&self) -> Option<HotkeyKind> {
        match self {
            TriggerMode::Hotkey => Some(HotkeyKind::Targets),
            TriggerMode::SelfHotkey => Some(HotkeyKind::SelfWindow),
            _ => None,
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TriggerMode::Hotkey => "hotkey",
            TriggerMode::MiddleClick => "middle-click",
            TriggerMode::Chord => "left+right chord",
            TriggerMode::PointerPosition => "pointer position",
            TriggerMode::SelfHotkey => "self hotkey",
        };
        f.write_str(name)
    }
}

/// Which windows enumeration admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListPolicy {
    pub include_disabled: bool,
    pub include_untitled: bool,
    pub include_invisible: bool,
}
