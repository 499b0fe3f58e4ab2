use global_hotkey::GlobalHotKeyEvent;
use tray_icon::menu::MenuEvent;

/// Events forwarded into the `tao` event loop.
///
/// Tray-menu and hotkey callbacks fire on whatever thread the OS uses; they
/// are re-posted here so all routing happens on the event-loop thread.
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// A tray menu item was clicked.
    Menu(MenuEvent),
    /// A global hotkey was pressed or released.
    Hotkey(GlobalHotKeyEvent),
}
