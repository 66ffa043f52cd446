//! Hotkey combinations (pure Rust, no FFI).
//!
//! Modifier and key selections are persisted as strings ("Control", "H")
//! and converted to the native flag set and virtual-key code here, so the
//! conversion is testable without the OS.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use super::constants::*;
use crate::error::BindingParseError;

bitflags! {
    /// Modifier keys of a hotkey combination.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const ALT = 0b0001;
        const CONTROL = 0b0010;
        const SHIFT = 0b0100;
        const META = 0b1000;
    }
}

impl Modifiers {
    /// Native flag set for the OS hotkey call.
    ///
    /// Always includes the no-auto-repeat flag so a held key fires once.
    pub fn to_native(self) -> u32 {
        let mut flags = NATIVE_MOD_NOREPEAT;
        if self.contains(Modifiers::ALT) {
            flags |= NATIVE_MOD_ALT;
        }
        if self.contains(Modifiers::CONTROL) {
            flags |= NATIVE_MOD_CONTROL;
        }
        if self.contains(Modifiers::SHIFT) {
            flags |= NATIVE_MOD_SHIFT;
        }
        if self.contains(Modifiers::META) {
            flags |= NATIVE_MOD_WIN;
        }
        flags
    }

    /// Parse one persisted modifier selection. `"None"` is the empty set.
    pub fn parse_selection(s: &str) -> Result<Modifiers, BindingParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Modifiers::empty()),
            "alt" => Ok(Modifiers::ALT),
            "control" | "ctrl" => Ok(Modifiers::CONTROL),
            "shift" => Ok(Modifiers::SHIFT),
            "meta" | "windows" | "win" => Ok(Modifiers::META),
            _ => Err(BindingParseError::UnknownModifier(s.to_string())),
        }
    }

    /// Combine several selections, as made in three separate pickers.
    pub fn from_selections<'a, I>(selections: I) -> Result<Modifiers, BindingParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        selections
            .into_iter()
            .try_fold(Modifiers::empty(), |acc, s| Ok(acc | Modifiers::parse_selection(s)?))
    }

    /// Number of modifiers in the set.
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// True if the set can be stored in the three selection fields.
    pub fn fits_selections(self) -> bool {
        self.count() <= MAX_MODIFIER_SELECTIONS
    }

    fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Modifiers::CONTROL) {
            names.push("Control");
        }
        if self.contains(Modifiers::ALT) {
            names.push("Alt");
        }
        if self.contains(Modifiers::SHIFT) {
            names.push("Shift");
        }
        if self.contains(Modifiers::META) {
            names.push("Meta");
        }
        names
    }

    /// Split back into three selection strings, padded with "None".
    ///
    /// Only lossless when [`fits_selections`](Self::fits_selections) holds;
    /// hotkey registries refuse larger sets.
    pub fn to_selections(self) -> [String; 3] {
        let names = self.names();
        let pick = |i: usize| names.get(i).copied().unwrap_or(SELECTION_NONE).to_string();
        [pick(0), pick(1), pick(2)]
    }
}

/// A single key, stored as its virtual-key code.
///
/// [`Key::NONE`] is the "no key selected" sentinel; a binding carrying it
/// can never be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(u16);

impl Key {
    pub const NONE: Key = Key(0);

    const VK_0: u16 = 0x30;
    const VK_A: u16 = 0x41;
    const VK_F1: u16 = 0x70;

    pub fn from_vk(vk: u16) -> Key {
        Key(vk)
    }

    pub fn vk(self) -> u16 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self == Key::NONE
    }

    /// Keys offered for selection: letters, digits, F1-F24.
    pub fn is_supported(self) -> bool {
        matches!(self.0, 0x30..=0x39 | 0x41..=0x5A | 0x70..=0x87)
    }
}

impl FromStr for Key {
    type Err = BindingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case(SELECTION_NONE) || t.is_empty() {
            return Ok(Key::NONE);
        }
        let upper = t.to_ascii_uppercase();
        let bytes = upper.as_bytes();
        if bytes.len() == 1 {
            let c = bytes[0];
            if c.is_ascii_uppercase() {
                return Ok(Key(Key::VK_A + u16::from(c - b'A')));
            }
            if c.is_ascii_digit() {
                return Ok(Key(Key::VK_0 + u16::from(c - b'0')));
            }
        }
        if let Some(n) = upper.strip_prefix('F').and_then(|n| n.parse::<u16>().ok()) {
            if (1..=24).contains(&n) {
                return Ok(Key(Key::VK_F1 + n - 1));
            }
        }
        Err(BindingParseError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str(SELECTION_NONE),
            vk @ 0x30..=0x39 => write!(f, "{}", char::from((vk - Key::VK_0) as u8 + b'0')),
            vk @ 0x41..=0x5A => write!(f, "{}", char::from((vk - Key::VK_A) as u8 + b'A')),
            vk @ 0x70..=0x87 => write!(f, "F{}", vk - Key::VK_F1 + 1),
            vk => write!(f, "VK 0x{:02X}", vk),
        }
    }
}

/// Modifier set plus key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyBinding {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl HotkeyBinding {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// Parse three modifier selections and a key selection.
    pub fn from_selections(
        modifiers: [&str; 3],
        key: &str,
    ) -> Result<HotkeyBinding, BindingParseError> {
        Ok(HotkeyBinding {
            modifiers: Modifiers::from_selections(modifiers)?,
            key: key.parse()?,
        })
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.modifiers.names() {
            write!(f, "{}+", name)?;
        }
        write!(f, "{}", self.key)
    }
}
