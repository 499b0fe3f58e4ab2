use crate::{PlanIndex, PowerError};

/// Per-plan results of [`HotkeyRouter::register_all`](crate::HotkeyRouter::register_all).
#[derive(Debug, Default)]
pub struct RegistrationReport {
    /// Plans that now own a global shortcut.
    pub registered: Vec<PlanIndex>,
    /// Plans left without a shortcut, one error each.
    pub failures: Vec<PowerError>,
}

impl RegistrationReport {
    /// True when every plan got its shortcut.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
