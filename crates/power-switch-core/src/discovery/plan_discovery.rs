use crate::{CoreResult, PlanSet, PowerError, PowerUtility, discovery::parse_listing};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// One-shot enumeration of the power plans known to the OS.
pub struct PlanDiscovery<'a, U: PowerUtility + ?Sized> {
    utility: &'a U,
}

impl<'a, U: PowerUtility + ?Sized> PlanDiscovery<'a, U> {
    /// Create a discovery over the given utility.
    pub fn new(utility: &'a U) -> Self {
        Self { utility }
    }

    /// Run the listing command and parse it into a frozen plan set.
    ///
    /// Called once at startup. The result is never refreshed: hotkey and
    /// menu bindings rely on indices staying fixed.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::UtilityLaunchFailed`] if the utility cannot be
    /// started and [`PowerError::DiscoveryFailed`] if it exits abnormally
    /// without printing anything. Both are fatal for the application.
    #[track_caller]
    #[instrument(skip(self), fields(program = self.utility.program()))]
    pub fn discover(&self) -> CoreResult<Arc<PlanSet>> {
        let output =
            self.utility
                .list_plans()
                .map_err(|source| PowerError::UtilityLaunchFailed {
                    program: self.utility.program().to_string(),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?;

        if !output.success {
            if output.stdout.trim().is_empty() {
                return Err(PowerError::DiscoveryFailed {
                    reason: format!(
                        "{} exited with code {:?} and no output: {}",
                        self.utility.program(),
                        output.exit_code,
                        output.stderr.trim()
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            warn!(
                exit_code = ?output.exit_code,
                "Power utility exited abnormally, parsing partial output"
            );
        }

        let plans = parse_listing(&output.stdout);

        for plan in &plans {
            debug!(
                index = %plan.index(),
                plan_id = plan.id(),
                plan_name = plan.name(),
                current = plan.is_current_at_discovery(),
                "Discovered power plan"
            );
        }

        info!(plan_count = plans.len(), "Power plan discovery complete");

        Ok(Arc::new(plans))
    }
}
