use crate::{GlobalHotkeyBackend, Notifier, TrayManager, UserEvent, tray_manager};

use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use power_switch_core::{ActivationService, DispatchOutcome, HotkeyRouter, Powercfg};
use tracing::{debug, error, info, instrument};
use tray_icon::menu::MenuEvent;

/// Router type used by the running application.
pub(crate) type PlanRouter =
    HotkeyRouter<Option<GlobalHotkeyBackend>, ActivationService<Powercfg, Notifier>>;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    /// Keep waiting for events.
    Continue,
    /// Tear down and leave the event loop.
    Exit,
}

/// Main application state.
///
/// Lives on the event-loop thread with the tray icon (`TrayIcon` is `!Send`).
/// Every hotkey and menu event funnels through [`App::handle_event`].
pub struct App {
    pub(crate) router: PlanRouter,
    pub(crate) tray_manager: TrayManager,
}

impl App {
    /// Handle one forwarded event.
    #[instrument(skip(self))]
    pub(crate) fn handle_event(&mut self, event: UserEvent) -> AppControl {
        match event {
            UserEvent::Menu(event) => self.handle_menu_event(event),
            UserEvent::Hotkey(event) => {
                self.handle_hotkey_event(event);
                AppControl::Continue
            }
        }
    }

    /// Release global hotkeys. Safe to call more than once.
    #[instrument(skip(self))]
    pub(crate) fn shutdown(&mut self) {
        self.router.unregister_all();
    }

    fn handle_menu_event(&mut self, event: MenuEvent) -> AppControl {
        let event_id = &event.id;

        if tray_manager::is_exit(event_id) {
            info!("Exit requested from tray menu");
            self.shutdown();
            return AppControl::Exit;
        }

        if let Some(plan_id) = tray_manager::plan_event_id(event_id) {
            let outcome = self.router.dispatch(plan_id);
            self.apply_outcome(outcome);
        } else {
            debug!(menu_id = ?event_id, "Ignoring unknown menu event");
        }

        self.tray_manager.sync_checks();

        AppControl::Continue
    }

    fn handle_hotkey_event(&mut self, event: GlobalHotKeyEvent) {
        if event.state != HotKeyState::Pressed {
            return;
        }

        let outcome = self.router.dispatch_hotkey(event.id);
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: DispatchOutcome) {
        match outcome {
            DispatchOutcome::Activated(receipt) => {
                if let Err(e) = self.tray_manager.mark_active(receipt.plan.index()) {
                    error!(error = ?e, "Failed to update tray after switch");
                }
            }
            // The presenter has already shown the failure.
            DispatchOutcome::Failed(_) => {}
            DispatchOutcome::Ignored { event_id } => {
                debug!(event_id, "Event did not match a plan");
            }
        }
    }
}
