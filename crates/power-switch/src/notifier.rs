//! Desktop notifications for plan switches.

use crate::{APP_NAME, config::NotificationConfig};

use notify_rust::{Notification, Timeout};
use power_switch_core::{PlanRecord, PowerError, Presenter};
use tracing::{error, warn};

/// Shows a short notification naming the plan after each switch.
///
/// Confirmations respect `notifications.enabled`. Failures are always shown,
/// so a failed switch is never silent.
pub struct Notifier {
    enabled: bool,
    timeout_ms: u32,
}

impl Notifier {
    /// Create a notifier from configuration.
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            enabled: config.enabled,
            timeout_ms: config.timeout_ms,
        }
    }

    fn show(&self, body: &str) {
        let result = Notification::new()
            .summary(APP_NAME)
            .body(body)
            .timeout(Timeout::Milliseconds(self.timeout_ms))
            .show()
            .map(|_| ());

        if let Err(e) = result {
            warn!(error = %e, "Failed to show notification");
        }
    }
}

/// Message shown to the user for a failed switch.
pub(crate) fn failure_message(error: &PowerError) -> String {
    match error {
        PowerError::ActivationFailed { plan, source, .. } => {
            format!("Could not switch to {}: {}", plan.name(), source)
        }
        other => format!("Could not switch power plan: {}", other),
    }
}

impl Presenter for Notifier {
    fn confirm(&self, plan: &PlanRecord) {
        if self.enabled {
            self.show(plan.name());
        }
    }

    fn report_failure(&self, error: &PowerError) {
        error!(error = %error, "Power plan switch failed");
        self.show(&failure_message(error));
    }
}
