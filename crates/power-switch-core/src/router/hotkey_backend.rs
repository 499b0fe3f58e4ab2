use crate::{CoreResult, PlanIndex, PlanRecord, PowerError};

use std::panic::Location;

use error_location::ErrorLocation;

/// OS-level global hotkey registration, keyed by plan index.
///
/// The key combination is backend policy. Backends whose OS identifiers differ
/// from plan indices translate them back through [`resolve`](Self::resolve).
pub trait HotkeyBackend {
    /// Register the shortcut for `plan`.
    fn register(&mut self, plan: &PlanRecord) -> CoreResult<()>;

    /// Release the shortcut previously registered for `index`.
    fn unregister(&mut self, index: PlanIndex) -> CoreResult<()>;

    /// Map an OS hotkey event identifier to the plan it was registered for.
    fn resolve(&self, os_event_id: u32) -> Option<PlanIndex>;
}

/// A missing backend runs the router menu-only: every registration fails for
/// its plan alone and no OS hotkey id resolves.
impl<B: HotkeyBackend> HotkeyBackend for Option<B> {
    #[track_caller]
    fn register(&mut self, plan: &PlanRecord) -> CoreResult<()> {
        match self {
            Some(backend) => backend.register(plan),
            None => Err(PowerError::HotkeyRegistrationFailed {
                index: plan.index().get(),
                reason: "global hotkeys unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    fn unregister(&mut self, index: PlanIndex) -> CoreResult<()> {
        match self {
            Some(backend) => backend.unregister(index),
            None => Ok(()),
        }
    }

    fn resolve(&self, os_event_id: u32) -> Option<PlanIndex> {
        self.as_ref().and_then(|backend| backend.resolve(os_event_id))
    }
}
