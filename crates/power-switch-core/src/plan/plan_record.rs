use crate::PlanIndex;

use std::fmt;

/// One power plan as reported by the power utility at startup.
///
/// Immutable once discovered. `is_current_at_discovery` is a snapshot and
/// is never re-queried, so it goes stale after the first switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRecord {
    index: PlanIndex,
    id: String,
    name: String,
    is_current_at_discovery: bool,
}

impl PlanRecord {
    pub(crate) fn new(
        index: PlanIndex,
        id: impl Into<String>,
        name: impl Into<String>,
        is_current_at_discovery: bool,
    ) -> Self {
        Self {
            index,
            id: id.into(),
            name: name.into(),
            is_current_at_discovery,
        }
    }

    /// Stable hotkey/menu identifier.
    pub fn index(&self) -> PlanIndex {
        self.index
    }

    /// Plan GUID exactly as printed by the utility.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the utility marked this plan active when it was listed.
    pub fn is_current_at_discovery(&self) -> bool {
        self.is_current_at_discovery
    }
}

impl fmt::Display for PlanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.index, self.name, self.id, self.is_current_at_discovery
        )
    }
}
