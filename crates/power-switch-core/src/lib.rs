//! Power Switch Core Library
//!
//! Discovers the OS power plans once at startup, binds each to a stable index,
//! and routes hotkey and menu events to plan activation.
//!
//! # Example
//!
//! ```no_run
//! use power_switch_core::{
//!     ActivationService, CoreResult, PlanDiscovery, PlanRecord, PowerError, Powercfg, Presenter,
//! };
//! use power_switch_core::Activate;
//!
//! struct Stdout;
//!
//! impl Presenter for Stdout {
//!     fn confirm(&self, plan: &PlanRecord) {
//!         println!("Switched to {}", plan.name());
//!     }
//!
//!     fn report_failure(&self, error: &PowerError) {
//!         eprintln!("{error}");
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let powercfg = Powercfg::default();
//!     let plans = PlanDiscovery::new(&powercfg).discover()?;
//!
//!     let service = ActivationService::new(powercfg, Stdout);
//!     if let Some(plan) = plans.iter().next() {
//!         service.activate(plan)?;
//!     }
//!     Ok(())
//! }
//! ```

mod activation;
mod discovery;
mod error;
mod plan;
mod router;
mod utility;

pub use {
    activation::{Activate, ActivationReceipt, ActivationService, Presenter},
    discovery::PlanDiscovery,
    error::{PowerError, Result as CoreResult},
    plan::{PlanIndex, PlanRecord, PlanSet},
    router::{DispatchOutcome, HotkeyBackend, HotkeyRouter, RegistrationReport},
    utility::{DEFAULT_PROGRAM as DEFAULT_UTILITY_PROGRAM, PowerUtility, Powercfg, UtilityOutput},
};

#[cfg(test)]
mod tests;
