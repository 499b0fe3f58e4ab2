use crate::{PlanRecord, PowerError};

/// User-facing side of activation: confirmations and failures.
///
/// Implemented by the tray application (desktop notifications). Calls happen
/// on the event thread and must not block for long.
pub trait Presenter {
    /// A plan switch was launched.
    fn confirm(&self, plan: &PlanRecord);

    /// A plan switch could not be launched.
    fn report_failure(&self, error: &PowerError);
}
