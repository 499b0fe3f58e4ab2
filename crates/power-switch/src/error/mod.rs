use power_switch_core::PowerError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the power-switch binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Power plan error from power-switch-core.
    #[error("Power plan error: {source} {location}")]
    Power {
        /// The underlying core error.
        #[source]
        source: PowerError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to set up the global hotkey manager.
    #[error("Hotkey manager unavailable: {reason} {location}")]
    HotkeyManagerFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to build or update the tray icon and its menu.
    #[error("Tray error: {reason} {location}")]
    TrayError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to acquire the single-instance lock.
    #[cfg_attr(not(target_os = "windows"), allow(dead_code))]
    #[error("Single-instance guard failed: {reason} {location}")]
    InstanceGuardFailed {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<PowerError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<PowerError> for AppError {
    #[track_caller]
    fn from(source: PowerError) -> Self {
        AppError::Power {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
