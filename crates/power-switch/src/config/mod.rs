mod hotkey_config;
mod notification_config;
#[allow(clippy::module_inception)]
mod config;
mod utility_config;

pub(crate) use {
    config::Config,
    hotkey_config::{HotkeyConfig, ModifierKey},
    notification_config::NotificationConfig,
    utility_config::UtilityConfig,
};

pub(crate) const DEFAULT_HOTKEYS_ENABLED: bool = true;
pub(crate) const DEFAULT_NOTIFICATIONS_ENABLED: bool = true;
pub(crate) const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 2000;

pub(crate) fn default_hotkeys_enabled() -> bool {
    DEFAULT_HOTKEYS_ENABLED
}

pub(crate) fn default_modifiers() -> Vec<ModifierKey> {
    vec![ModifierKey::Control, ModifierKey::Shift]
}

pub(crate) fn default_notifications_enabled() -> bool {
    DEFAULT_NOTIFICATIONS_ENABLED
}

pub(crate) fn default_notification_timeout_ms() -> u32 {
    DEFAULT_NOTIFICATION_TIMEOUT_MS
}

pub(crate) fn default_program() -> String {
    power_switch_core::DEFAULT_UTILITY_PROGRAM.to_string()
}
