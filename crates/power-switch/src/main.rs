//! Power Switch: switch the Windows power plan from the tray or a hotkey.

#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

mod app;
mod config;
mod error;
mod global_hotkey_backend;
mod instance_guard;
mod logging;
mod notifier;
mod startup;
mod tray_manager;
mod user_event;

pub(crate) use {
    app::{App, AppControl},
    error::{AppError, Result as AppResult},
    global_hotkey_backend::GlobalHotkeyBackend,
    instance_guard::InstanceGuard,
    notifier::Notifier,
    tray_manager::TrayManager,
    user_event::UserEvent,
};

use crate::startup::Startup;

use std::sync::Arc;

use global_hotkey::GlobalHotKeyEvent;
use power_switch_core::{ActivationService, HotkeyRouter, Powercfg};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tray_icon::menu::MenuEvent;

/// Display name used in the tray tooltip and notifications.
pub(crate) const APP_NAME: &str = "Power Switch";

/// Flush logs, then end the process with a failure code.
fn exit_with_failure(log_guard: Option<WorkerGuard>) -> ! {
    logging::finish(log_guard);
    std::process::exit(1);
}

/// Application entry point.
fn main() {
    let mut log_guard = logging::init();

    let startup = match Startup::prepare(|config| Powercfg::new(config.utility.program.as_str())) {
        Ok(Some(startup)) => startup,
        Ok(None) => {
            logging::finish(log_guard.take());
            return;
        }
        Err(e) => {
            error!("Startup failed: {:?}", e);
            exit_with_failure(log_guard.take());
        }
    };

    let Startup {
        instance_guard,
        config,
        utility: powercfg,
        plans,
    } = startup;
    let mut instance_guard = Some(instance_guard);

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    // Re-post tray and hotkey callbacks onto the event-loop thread.
    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = menu_proxy.send_event(UserEvent::Menu(event));
    }));
    let hotkey_proxy = event_loop.create_proxy();
    GlobalHotKeyEvent::set_event_handler(Some(move |event| {
        let _ = hotkey_proxy.send_event(UserEvent::Hotkey(event));
    }));

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(&plans) {
        Ok(tm) => Some(tm),
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            exit_with_failure(log_guard.take());
        }
    };

    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                // Register hotkeys on the main thread: tao's event loop pumps
                // the Windows messages needed for WM_HOTKEY delivery. Without
                // a manager the tray menu still switches plans.
                let backend = if config.hotkeys.enabled {
                    match GlobalHotkeyBackend::new(config.hotkeys.modifier_mask()) {
                        Ok(backend) => Some(backend),
                        Err(e) => {
                            warn!(error = ?e, "Global hotkeys unavailable, running menu-only");
                            None
                        }
                    }
                } else {
                    info!("Global hotkeys disabled in config");
                    None
                };

                let activation =
                    ActivationService::new(powercfg.clone(), Notifier::new(&config.notifications));
                let mut router = HotkeyRouter::new(Arc::clone(&plans), backend, activation);

                if router.backend().is_some() {
                    let report = router.register_all();
                    if !report.is_complete() {
                        warn!(
                            failed = report.failures.len(),
                            "Some plans have no global hotkey"
                        );
                    }
                }

                let Some(tray_manager) = tray_manager.take() else {
                    return;
                };

                app = Some(App {
                    router,
                    tray_manager,
                });

                info!(plan_count = plans.len(), "Power Switch running");
            }
            Event::UserEvent(user_event) => {
                if let Some(app) = app.as_mut() {
                    if app.handle_event(user_event) == AppControl::Exit {
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            Event::LoopDestroyed => {
                if let Some(mut app) = app.take() {
                    app.shutdown();
                }
                drop(instance_guard.take());
                info!("Power Switch shut down");
                logging::finish(log_guard.take());
            }
            _ => {}
        }
    });
}
