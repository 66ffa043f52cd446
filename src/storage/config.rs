//! JSON settings file.
//!
//! Stores settings in `<config dir>/WindowToggler/settings.json`.
//!
//! The file is read once at startup and written once at shutdown. Every key
//! has a default, so partial or older files still load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::model::constants::*;
use crate::model::{HotkeyBinding, HotkeyKind, Key, ListPolicy, Modifiers, TriggerMode};

/// Flat key/value settings bag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub list_invisible_windows: bool,
    pub list_untitled_windows: bool,
    pub list_disabled_windows: bool,

    pub use_hotkey: bool,
    pub use_middle_button: bool,
    pub use_simultaneous_left_right: bool,
    pub use_mouse_position: bool,
    pub use_self_hotkey: bool,

    pub hotkey_modifier_1: String,
    pub hotkey_modifier_2: String,
    pub hotkey_modifier_3: String,
    pub hotkey_key: String,

    pub self_hotkey_modifier_1: String,
    pub self_hotkey_modifier_2: String,
    pub self_hotkey_modifier_3: String,
    pub self_hotkey_key: String,

    /// Executable paths of the target group, re-matched at startup.
    pub target_app_paths: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let [m1, m2, m3] = DEFAULT_TARGET_MODIFIERS.map(String::from);
        let [s1, s2, s3] = DEFAULT_SELF_MODIFIERS.map(String::from);
        Self {
            list_invisible_windows: false,
            list_untitled_windows: false,
            list_disabled_windows: false,
            use_hotkey: true,
            use_middle_button: false,
            use_simultaneous_left_right: false,
            use_mouse_position: false,
            use_self_hotkey: false,
            hotkey_modifier_1: m1,
            hotkey_modifier_2: m2,
            hotkey_modifier_3: m3,
            hotkey_key: DEFAULT_TARGET_KEY.to_string(),
            self_hotkey_modifier_1: s1,
            self_hotkey_modifier_2: s2,
            self_hotkey_modifier_3: s3,
            self_hotkey_key: DEFAULT_SELF_KEY.to_string(),
            target_app_paths: Vec::new(),
        }
    }
}

/// Control+Alt+H
fn default_target_binding() -> HotkeyBinding {
    HotkeyBinding::new(Modifiers::CONTROL | Modifiers::ALT, Key::from_vk(0x48))
}

/// Control+Alt+W
fn default_self_binding() -> HotkeyBinding {
    HotkeyBinding::new(Modifiers::CONTROL | Modifiers::ALT, Key::from_vk(0x57))
}

impl Settings {
    /// Replace unusable hotkey selections with the defaults.
    ///
    /// Ensures bindings read back from disk always carry a real key.
    pub fn validate(&mut self) {
        for kind in [HotkeyKind::Targets, HotkeyKind::SelfWindow] {
            let parsed = self.parse_binding(kind);
            let usable = matches!(parsed, Ok(b) if !b.key.is_none());
            if !usable {
                warn!(?kind, ?parsed, "Invalid hotkey in settings, using default");
                let fallback = match kind {
                    HotkeyKind::Targets => default_target_binding(),
                    HotkeyKind::SelfWindow => default_self_binding(),
                };
                self.set_binding(kind, fallback);
            }
        }
    }

    fn parse_binding(
        &self,
        kind: HotkeyKind,
    ) -> Result<HotkeyBinding, crate::error::BindingParseError> {
        match kind {
            HotkeyKind::Targets => HotkeyBinding::from_selections(
                [
                    self.hotkey_modifier_1.as_str(),
                    self.hotkey_modifier_2.as_str(),
                    self.hotkey_modifier_3.as_str(),
                ],
                &self.hotkey_key,
            ),
            HotkeyKind::SelfWindow => HotkeyBinding::from_selections(
                [
                    self.self_hotkey_modifier_1.as_str(),
                    self.self_hotkey_modifier_2.as_str(),
                    self.self_hotkey_modifier_3.as_str(),
                ],
                &self.self_hotkey_key,
            ),
        }
    }

    /// The stored binding for `kind`, or its default when unusable.
    pub fn binding(&self, kind: HotkeyKind) -> HotkeyBinding {
        match self.parse_binding(kind) {
            Ok(binding) if !binding.key.is_none() => binding,
            _ => match kind {
                HotkeyKind::Targets => default_target_binding(),
                HotkeyKind::SelfWindow => default_self_binding(),
            },
        }
    }

    pub fn set_binding(&mut self, kind: HotkeyKind, binding: HotkeyBinding) {
        let [m1, m2, m3] = binding.modifiers.to_selections();
        let key = binding.key.to_string();
        match kind {
            HotkeyKind::Targets => {
                self.hotkey_modifier_1 = m1;
                self.hotkey_modifier_2 = m2;
                self.hotkey_modifier_3 = m3;
                self.hotkey_key = key;
            }
            HotkeyKind::SelfWindow => {
                self.self_hotkey_modifier_1 = m1;
                self.self_hotkey_modifier_2 = m2;
                self.self_hotkey_modifier_3 = m3;
                self.self_hotkey_key = key;
            }
        }
    }

    pub fn is_mode_enabled(&self, mode: TriggerMode) -> bool {
        match mode {
            TriggerMode::Hotkey => self.use_hotkey,
            TriggerMode::MiddleClick => self.use_middle_button,
            TriggerMode::Chord => self.use_simultaneous_left_right,
            TriggerMode::PointerPosition => self.use_mouse_position,
            TriggerMode::SelfHotkey => self.use_self_hotkey,
        }
    }

    pub fn set_mode_enabled(&mut self, mode: TriggerMode, enabled: bool) {
        let flag = match mode {
            TriggerMode::Hotkey => &mut self.use_hotkey,
            TriggerMode::MiddleClick => &mut self.use_middle_button,
            TriggerMode::Chord => &mut self.use_simultaneous_left_right,
            TriggerMode::PointerPosition => &mut self.use_mouse_position,
            TriggerMode::SelfHotkey => &mut self.use_self_hotkey,
        };
        *flag = enabled;
    }

    pub fn policy(&self) -> ListPolicy {
        ListPolicy {
            include_disabled: self.list_disabled_windows,
            include_untitled: self.list_untitled_windows,
            include_invisible: self.list_invisible_windows,
        }
    }

    pub fn set_policy(&mut self, policy: ListPolicy) {
        self.list_disabled_windows = policy.include_disabled;
        self.list_untitled_windows = policy.include_untitled;
        self.list_invisible_windows = policy.include_invisible;
    }
}

/// Default settings path: `<config dir>/WindowToggler/settings.json`.
///
/// Falls back to the working directory when the platform has no config dir.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load settings from `path`, returning validated defaults if the file is
/// missing or invalid.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!(path = %path.display(), "Settings loaded");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Settings file is invalid, using defaults");
                Settings::default()
            }
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No settings file, using defaults");
            Settings::default()
        }
    };
    settings.validate();
    settings
}

/// Write `settings` as pretty JSON, creating parent directories.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "Settings saved");
    Ok(())
}
