use crate::{CoreResult, PlanRecord, PowerError, PowerUtility, Presenter};

use std::{
    panic::Location,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Something that can make a plan the active one.
///
/// [`HotkeyRouter`](crate::HotkeyRouter) dispatches through this trait so the
/// routing logic can be exercised without touching the OS.
pub trait Activate {
    /// Switch the OS to `plan`.
    fn activate(&self, plan: &PlanRecord) -> CoreResult<ActivationReceipt>;
}

/// Record of a launched plan switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationReceipt {
    /// The plan that was requested.
    pub plan: PlanRecord,
    /// Utility exit code. Informational only, never treated as failure.
    pub exit_code: Option<i32>,
    /// Wall time spent in the utility.
    pub elapsed: Duration,
}

/// Switches the active power plan through the power utility.
///
/// No single-flight guard: concurrent requests each run to completion and the
/// last one to finish wins, which is fine because the OS switch is atomic.
pub struct ActivationService<U: PowerUtility, P: Presenter> {
    utility: U,
    presenter: P,
}

impl<U: PowerUtility, P: Presenter> ActivationService<U, P> {
    /// Create a service over the given utility and presenter.
    pub fn new(utility: U, presenter: P) -> Self {
        Self { utility, presenter }
    }

    /// The utility plan switches are launched through.
    pub fn utility(&self) -> &U {
        &self.utility
    }

    /// The presenter notified after each activation.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

impl<U: PowerUtility, P: Presenter> Activate for ActivationService<U, P> {
    /// Launch the utility's set-active command for `plan`.
    ///
    /// Success means the process launched; its exit status is logged but not
    /// acted on. There is no rollback if the utility misbehaves.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::ActivationFailed`] if the process could not be
    /// started. The presenter is told about the failure before returning.
    #[track_caller]
    #[instrument(skip(self, plan), fields(index = %plan.index(), plan_name = plan.name()))]
    fn activate(&self, plan: &PlanRecord) -> CoreResult<ActivationReceipt> {
        let start = Instant::now();

        let output = match self.utility.set_active(plan.id()) {
            Ok(output) => output,
            Err(source) => {
                let error = PowerError::ActivationFailed {
                    plan: plan.clone(),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                };
                self.presenter.report_failure(&error);
                return Err(error);
            }
        };

        let elapsed = start.elapsed();

        if !output.success {
            warn!(
                plan_id = plan.id(),
                exit_code = ?output.exit_code,
                stderr = output.stderr.trim(),
                "Power utility reported a non-zero exit on activation"
            );
        }

        info!(
            plan_id = plan.id(),
            duration_ms = elapsed.as_millis(),
            "Power plan activated"
        );

        self.presenter.confirm(plan);

        Ok(ActivationReceipt {
            plan: plan.clone(),
            exit_code: output.exit_code,
            elapsed,
        })
    }
}
