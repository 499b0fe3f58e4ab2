//! Binds plan indices to global hotkeys and routes events to activation.
//!
//! All methods run on the event-loop thread. Events from the OS arrive one at
//! a time, so the router keeps no locks.

use crate::{
    Activate, DispatchOutcome, HotkeyBackend, PlanIndex, PlanSet, RegistrationReport,
};

use std::{collections::BTreeSet, sync::Arc};

use tracing::{debug, info, instrument, warn};

/// Hotkey and menu event router.
///
/// Owns the set of registered indices. Registration happens once at startup
/// and is reversed once at shutdown; nothing else mutates it.
pub struct HotkeyRouter<B: HotkeyBackend, A: Activate> {
    plans: Arc<PlanSet>,
    backend: B,
    activator: A,
    registered: BTreeSet<PlanIndex>,
    torn_down: bool,
}

impl<B: HotkeyBackend, A: Activate> HotkeyRouter<B, A> {
    /// Create an unregistered router over the frozen plan set.
    pub fn new(plans: Arc<PlanSet>, backend: B, activator: A) -> Self {
        Self {
            plans,
            backend,
            activator,
            registered: BTreeSet::new(),
            torn_down: false,
        }
    }

    /// Register one global hotkey per plan.
    ///
    /// Registrations are independent: a plan whose shortcut is taken by
    /// another process is reported in the returned failures and the rest
    /// proceed. An empty plan set registers nothing and succeeds.
    #[instrument(skip(self), fields(plan_count = self.plans.len()))]
    pub fn register_all(&mut self) -> RegistrationReport {
        let mut report = RegistrationReport::default();

        if self.torn_down {
            warn!("Hotkeys already torn down, not registering again");
            return report;
        }

        for plan in self.plans.iter() {
            if self.registered.contains(&plan.index()) {
                continue;
            }

            match self.backend.register(plan) {
                Ok(()) => {
                    self.registered.insert(plan.index());
                    report.registered.push(plan.index());
                    debug!(index = %plan.index(), plan_name = plan.name(), "Hotkey registered");
                }
                Err(e) => {
                    warn!(index = %plan.index(), plan_name = plan.name(), error = %e, "Hotkey not registered");
                    report.failures.push(e);
                }
            }
        }

        info!(
            registered = report.registered.len(),
            failed = report.failures.len(),
            "Hotkey registration complete"
        );

        report
    }

    /// Route a hotkey or menu identifier to its plan and activate it.
    ///
    /// `event_id` is the plan index carried by the event. Identifiers that
    /// match no plan are ignored. A match triggers exactly one activation.
    #[instrument(skip(self))]
    pub fn dispatch(&self, event_id: u32) -> DispatchOutcome {
        let Some(plan) = self.plans.by_event_id(event_id) else {
            debug!(event_id, "Ignoring event for unknown plan");
            return DispatchOutcome::Ignored { event_id };
        };

        match self.activator.activate(plan) {
            Ok(receipt) => DispatchOutcome::Activated(receipt),
            Err(e) => {
                warn!(index = %plan.index(), error = %e, "Activation failed");
                DispatchOutcome::Failed(e)
            }
        }
    }

    /// Route a raw OS hotkey event, translating its identifier through the
    /// backend first.
    #[instrument(skip(self))]
    pub fn dispatch_hotkey(&self, os_event_id: u32) -> DispatchOutcome {
        match self.backend.resolve(os_event_id) {
            Some(index) if self.registered.contains(&index) => self.dispatch(index.get()),
            _ => {
                debug!(os_event_id, "Ignoring hotkey not owned by this router");
                DispatchOutcome::Ignored {
                    event_id: os_event_id,
                }
            }
        }
    }

    /// Release every registered hotkey.
    ///
    /// Runs once during teardown; later calls do nothing. Failures are
    /// logged and the remaining hotkeys are still released. Returns how many
    /// were released cleanly.
    #[instrument(skip(self))]
    pub fn unregister_all(&mut self) -> usize {
        if self.torn_down {
            debug!("Hotkeys already unregistered");
            return 0;
        }
        self.torn_down = true;

        let mut released = 0;
        for index in std::mem::take(&mut self.registered) {
            match self.backend.unregister(index) {
                Ok(()) => released += 1,
                Err(e) => warn!(index = %index, error = %e, "Failed to unregister hotkey"),
            }
        }

        info!(released, "Hotkeys unregistered");

        released
    }

    /// Whether `index` currently owns a global shortcut.
    pub fn is_registered(&self, index: PlanIndex) -> bool {
        self.registered.contains(&index)
    }

    /// Indices with a live registration, ascending.
    pub fn registered(&self) -> impl Iterator<Item = PlanIndex> + '_ {
        self.registered.iter().copied()
    }

    /// The activation service events are routed to.
    pub fn activator(&self) -> &A {
        &self.activator
    }

    /// The hotkey backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
