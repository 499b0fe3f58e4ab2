//! System tray icon and plan menu.
//!
//! The menu lists one check item per discovered plan in discovery order,
//! then a separator and Exit. Plan items carry `plan:<index>` ids so clicks
//! route through the same index space as hotkeys.

use crate::{APP_NAME, AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use power_switch_core::{PlanIndex, PlanSet};
use tracing::{debug, info, instrument};
use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const PLAN_MENU_PREFIX: &str = "plan:";
const EXIT_MENU_ID: &str = "exit";
const ICON_SIZE: u32 = 32;

/// Menu id for a plan entry.
pub(crate) fn plan_menu_id(index: PlanIndex) -> MenuId {
    MenuId::new(format!("{PLAN_MENU_PREFIX}{index}"))
}

/// Raw plan event id carried by a menu id, if it is a plan entry.
///
/// The result is not checked against the plan set; the router ignores ids
/// that match no plan.
pub(crate) fn plan_event_id(id: &MenuId) -> Option<u32> {
    let raw: &str = id.as_ref();
    raw.strip_prefix(PLAN_MENU_PREFIX)?.parse().ok()
}

/// Whether a menu id is the Exit entry.
pub(crate) fn is_exit(id: &MenuId) -> bool {
    let raw: &str = id.as_ref();
    raw == EXIT_MENU_ID
}

/// Tooltip text: program name and version, plus the active plan if known.
pub(crate) fn tooltip_text(active_plan: Option<&str>) -> String {
    let base = format!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
    match active_plan {
        Some(name) => format!("{base} - {name}"),
        None => base,
    }
}

/// System tray icon manager.
///
/// Tracks which plan this process last switched to and shows it as the
/// checked entry. Seeded from discovery; the utility is never re-queried.
pub struct TrayManager {
    tray_icon: TrayIcon,
    plans: Vec<(PlanIndex, String, CheckMenuItem)>,
    active: Option<PlanIndex>,
}

impl TrayManager {
    /// Build the tray icon and its menu from the discovered plans.
    #[track_caller]
    #[instrument(skip(plans), fields(plan_count = plans.len()))]
    pub fn new(plans: &PlanSet) -> AppResult<Self> {
        let menu = Menu::new();
        let mut items = Vec::with_capacity(plans.len());

        for plan in plans {
            let item = CheckMenuItem::with_id(
                plan_menu_id(plan.index()),
                plan.name(),
                true,
                plan.is_current_at_discovery(),
                None,
            );

            menu.append(&item).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu item for {:?}: {}", plan.name(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            items.push((plan.index(), plan.name().to_string(), item));
        }

        if plans.is_empty() {
            let placeholder = MenuItem::new("No power plans found", false, None);
            menu.append(&placeholder).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add placeholder menu item: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add separator: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let exit_item = MenuItem::with_id(EXIT_MENU_ID, "Exit", true, None);
        menu.append(&exit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add exit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let active = plans.current_at_discovery().map(|plan| plan.index());

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(tooltip_text(
                plans.current_at_discovery().map(|plan| plan.name()),
            ))
            .with_menu(Box::new(menu))
            .with_icon(Self::load_icon()?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            plans: items,
            active,
        })
    }

    /// Record `index` as the plan this process last switched to.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn mark_active(&mut self, index: PlanIndex) -> AppResult<()> {
        self.active = Some(index);
        self.sync_checks();

        let name = self
            .plans
            .iter()
            .find(|(i, _, _)| *i == index)
            .map(|(_, name, _)| name.as_str());

        self.tray_icon
            .set_tooltip(Some(tooltip_text(name)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Put check marks back in line with the tracked active plan.
    ///
    /// Check items toggle themselves when clicked, so this runs after every
    /// menu event, including ones that failed or were ignored.
    pub fn sync_checks(&self) {
        for (index, _, item) in &self.plans {
            item.set_checked(Some(*index) == self.active);
        }
        debug!(active = ?self.active, "Tray check marks synced");
    }

    /// Render the tray icon: a filled disc with a vertical bar.
    ///
    /// Drawn in code so the binary carries no image assets.
    #[track_caller]
    fn load_icon() -> AppResult<Icon> {
        let center = (ICON_SIZE as f32 - 1.0) / 2.0;
        let radius = ICON_SIZE as f32 / 2.0 - 1.0;
        let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);

        for y in 0..ICON_SIZE {
            for x in 0..ICON_SIZE {
                let (dx, dy) = (x as f32 - center, y as f32 - center);
                let inside = dx * dx + dy * dy <= radius * radius;
                let bar = dx.abs() <= 2.5 && dy.abs() <= radius * 0.6;

                let pixel = match (inside, bar) {
                    (true, true) => [0xff, 0xff, 0xff, 0xff],
                    (true, false) => [0x2e, 0x7d, 0x32, 0xff],
                    (false, _) => [0, 0, 0, 0],
                };
                rgba.extend_from_slice(&pixel);
            }
        }

        Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
