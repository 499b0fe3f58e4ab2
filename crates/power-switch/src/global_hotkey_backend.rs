//! Global hotkey backend built on the `global-hotkey` crate.
//!
//! Each plan gets `<modifiers>+<digit>`: plans 1-9 use digits 1-9 and plan 10
//! uses 0. Later plans have no key and stay menu-only.

use crate::{AppError, AppResult};

use std::{collections::HashMap, panic::Location};

use error_location::ErrorLocation;
use global_hotkey::{
    GlobalHotKeyManager,
    hotkey::{Code, HotKey, Modifiers},
};
use power_switch_core::{CoreResult, HotkeyBackend, PlanIndex, PlanRecord, PowerError};
use tracing::{info, instrument};

/// Digit key bound to a plan index, if any.
pub(crate) fn digit_code(index: PlanIndex) -> Option<Code> {
    let code = match index.get() {
        1 => Code::Digit1,
        2 => Code::Digit2,
        3 => Code::Digit3,
        4 => Code::Digit4,
        5 => Code::Digit5,
        6 => Code::Digit6,
        7 => Code::Digit7,
        8 => Code::Digit8,
        9 => Code::Digit9,
        10 => Code::Digit0,
        _ => return None,
    };
    Some(code)
}

/// Hotkey backend that owns the OS registrations.
///
/// `global-hotkey` derives its own event ids from the key combination, so the
/// backend keeps a reverse map to turn events back into plan indices.
pub struct GlobalHotkeyBackend {
    manager: GlobalHotKeyManager,
    modifiers: Modifiers,
    hotkeys: HashMap<PlanIndex, HotKey>,
    plans_by_hotkey: HashMap<u32, PlanIndex>,
}

impl GlobalHotkeyBackend {
    /// Create the hotkey manager.
    ///
    /// Must be called on the thread running the `tao` event loop so that
    /// `WM_HOTKEY` messages are pumped on Windows.
    #[track_caller]
    #[instrument]
    pub fn new(modifiers: Modifiers) -> AppResult<Self> {
        let manager = GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyManagerFailed {
            reason: format!("Failed to create manager: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            manager,
            modifiers,
            hotkeys: HashMap::new(),
            plans_by_hotkey: HashMap::new(),
        })
    }
}

impl HotkeyBackend for GlobalHotkeyBackend {
    #[track_caller]
    #[instrument(skip(self, plan), fields(index = %plan.index()))]
    fn register(&mut self, plan: &PlanRecord) -> CoreResult<()> {
        let index = plan.index();

        let code = digit_code(index).ok_or_else(|| PowerError::HotkeyRegistrationFailed {
            index: index.get(),
            reason: "no digit key left for this plan".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let hotkey = HotKey::new(Some(self.modifiers), code);

        self.manager
            .register(hotkey)
            .map_err(|e| PowerError::HotkeyRegistrationFailed {
                index: index.get(),
                reason: format!("Failed to register {:?}+{:?}: {}", self.modifiers, code, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.hotkeys.insert(index, hotkey);
        self.plans_by_hotkey.insert(hotkey.id(), index);

        info!(
            modifiers = ?self.modifiers,
            key = ?code,
            plan_name = plan.name(),
            "Global hotkey registered"
        );

        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn unregister(&mut self, index: PlanIndex) -> CoreResult<()> {
        let hotkey =
            self.hotkeys
                .remove(&index)
                .ok_or_else(|| PowerError::HotkeyUnregistrationFailed {
                    index: index.get(),
                    reason: "no hotkey registered".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        self.plans_by_hotkey.remove(&hotkey.id());

        self.manager
            .unregister(hotkey)
            .map_err(|e| PowerError::HotkeyUnregistrationFailed {
                index: index.get(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn resolve(&self, os_event_id: u32) -> Option<PlanIndex> {
        self.plans_by_hotkey.get(&os_event_id).copied()
    }
}
