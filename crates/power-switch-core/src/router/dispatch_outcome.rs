use crate::{ActivationReceipt, PowerError};

/// What happened to a dispatched hotkey or menu event.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The identifier did not belong to any plan. Stale or foreign events end
    /// up here and are not errors.
    Ignored {
        /// The unmatched identifier.
        event_id: u32,
    },
    /// The plan switch was launched.
    Activated(ActivationReceipt),
    /// The plan switch could not be launched.
    Failed(PowerError),
}

impl DispatchOutcome {
    /// True if the event mapped to a plan, whether or not activation worked.
    pub fn was_routed(&self) -> bool {
        !matches!(self, DispatchOutcome::Ignored { .. })
    }
}
