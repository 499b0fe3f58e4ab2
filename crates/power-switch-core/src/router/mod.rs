mod dispatch_outcome;
mod hotkey_backend;
mod hotkey_router;
mod registration_report;

pub use {
    dispatch_outcome::DispatchOutcome, hotkey_backend::HotkeyBackend,
    hotkey_router::HotkeyRouter, registration_report::RegistrationReport,
};
