//! Everything that must succeed before the event loop starts.

use crate::{AppResult, InstanceGuard, config::Config};

use std::sync::Arc;

use power_switch_core::{PlanDiscovery, PlanSet, PowerUtility};
use tracing::{info, instrument, warn};

/// Name of the OS mutex that keeps a second copy from starting.
const INSTANCE_LOCK_NAME: &str = "Local\\PowerSwitch.SingleInstance";

/// State prepared on the main thread before the tray exists.
pub(crate) struct Startup<U: PowerUtility> {
    pub(crate) instance_guard: InstanceGuard,
    pub(crate) config: Config,
    pub(crate) utility: U,
    pub(crate) plans: Arc<PlanSet>,
}

impl<U: PowerUtility> Startup<U> {
    /// Take the instance lock, load config and discover plans.
    ///
    /// Returns `Ok(None)` when another instance already runs. Any error is
    /// fatal for the caller.
    #[instrument(skip(make_utility))]
    pub(crate) fn prepare(make_utility: impl FnOnce(&Config) -> U) -> AppResult<Option<Self>> {
        let Some(instance_guard) = InstanceGuard::acquire(INSTANCE_LOCK_NAME)? else {
            info!("Another instance is already running, exiting");
            return Ok(None);
        };

        let config = Config::load()?;
        config.validate()?;

        let utility = make_utility(&config);
        let plans = discover_plans(&utility)?;

        Ok(Some(Self {
            instance_guard,
            config,
            utility,
            plans,
        }))
    }
}

/// Run discovery once. Without it there is no index mapping, so errors end
/// the process.
#[track_caller]
pub(crate) fn discover_plans<U: PowerUtility>(utility: &U) -> AppResult<Arc<PlanSet>> {
    let plans = PlanDiscovery::new(utility).discover()?;

    if plans.is_empty() {
        warn!("No power plans found; the menu will only offer Exit");
    }

    Ok(plans)
}
