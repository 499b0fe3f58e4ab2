use crate::config::{default_notification_timeout_ms, default_notifications_enabled};

use serde::{Deserialize, Serialize};

/// Desktop notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Show a notification after each plan switch.
    #[serde(default = "default_notifications_enabled")]
    pub enabled: bool,

    /// How long the notification stays on screen.
    #[serde(default = "default_notification_timeout_ms")]
    pub timeout_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_notifications_enabled(),
            timeout_ms: default_notification_timeout_ms(),
        }
    }
}
