use crate::PlanRecord;

use error_location::ErrorLocation;
use thiserror::Error;

/// Power plan errors with source location tracking.
#[derive(Error, Debug)]
pub enum PowerError {
    /// The power utility could not be started.
    #[error("Failed to launch power utility {program:?}: {source} {location}")]
    UtilityLaunchFailed {
        /// Program that was being launched.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The power utility exited abnormally without listing any plans.
    #[error("Plan discovery failed: {reason} {location}")]
    DiscoveryFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A global hotkey could not be registered for a plan.
    #[error("Hotkey registration failed for plan {index}: {reason} {location}")]
    HotkeyRegistrationFailed {
        /// Index of the plan whose hotkey failed.
        index: u32,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A global hotkey could not be unregistered for a plan.
    #[error("Hotkey unregistration failed for plan {index}: {reason} {location}")]
    HotkeyUnregistrationFailed {
        /// Index of the plan whose hotkey failed.
        index: u32,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The utility could not be launched to activate a plan.
    #[error("Failed to activate plan {:?}: {source} {location}", .plan.name())]
    ActivationFailed {
        /// Plan that was being activated.
        plan: PlanRecord,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`PowerError`].
pub type Result<T> = std::result::Result<T, PowerError>;
