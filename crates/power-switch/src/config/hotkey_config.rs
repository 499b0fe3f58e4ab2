use crate::config::{default_hotkeys_enabled, default_modifiers};

use global_hotkey::hotkey::Modifiers;
use serde::{Deserialize, Serialize};

/// Modifier key names accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    /// Ctrl.
    Control,
    /// Shift.
    Shift,
    /// Alt / Option.
    Alt,
    /// Windows / Command key.
    Super,
}

impl From<ModifierKey> for Modifiers {
    fn from(key: ModifierKey) -> Self {
        match key {
            ModifierKey::Control => Modifiers::CONTROL,
            ModifierKey::Shift => Modifiers::SHIFT,
            ModifierKey::Alt => Modifiers::ALT,
            ModifierKey::Super => Modifiers::SUPER,
        }
    }
}

/// Global shortcut configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Whether to register per-plan shortcuts at all.
    #[serde(default = "default_hotkeys_enabled")]
    pub enabled: bool,

    /// Modifiers held together with the plan's digit key.
    #[serde(default = "default_modifiers")]
    pub modifiers: Vec<ModifierKey>,
}

impl HotkeyConfig {
    /// Combined modifier mask.
    pub fn modifier_mask(&self) -> Modifiers {
        self.modifiers
            .iter()
            .fold(Modifiers::empty(), |mask, key| mask | Modifiers::from(*key))
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            enabled: default_hotkeys_enabled(),
            modifiers: default_modifiers(),
        }
    }
}
