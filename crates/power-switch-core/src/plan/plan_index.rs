use std::{fmt, num::NonZeroU32};

/// 1-based position of a plan in discovery order.
///
/// Doubles as the hotkey identifier and the menu tag for the plan, so it
/// never changes for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanIndex(NonZeroU32);

impl PlanIndex {
    /// Wrap a raw event identifier. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw identifier as delivered by hotkey and menu events.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based slot for indexing into the ordered plan list.
    pub(crate) fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for PlanIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
