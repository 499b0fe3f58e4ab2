use crate::{PlanIndex, PlanRecord};

/// The frozen, ordered set of plans captured at startup.
///
/// Built once by [`PlanDiscovery`](crate::PlanDiscovery) and shared
/// read-only (typically behind an `Arc`) for the rest of the process.
/// Record `i` always has index `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSet {
    records: Vec<PlanRecord>,
}

impl PlanSet {
    /// Only discovery builds plan sets, which keeps indices contiguous.
    pub(crate) fn from_records(records: Vec<PlanRecord>) -> Self {
        debug_assert!(
            records
                .iter()
                .enumerate()
                .all(|(slot, record)| record.index().slot() == slot)
        );
        Self { records }
    }

    /// Look up a plan by its index in O(1).
    pub fn get(&self, index: PlanIndex) -> Option<&PlanRecord> {
        self.records
            .get(index.slot())
            .filter(|record| record.index() == index)
    }

    /// Look up a plan by a raw event identifier. Zero and out-of-range
    /// identifiers yield `None`.
    pub fn by_event_id(&self, event_id: u32) -> Option<&PlanRecord> {
        PlanIndex::new(event_id).and_then(|index| self.get(index))
    }

    /// Plan the utility flagged as active during discovery, if any.
    pub fn current_at_discovery(&self) -> Option<&PlanRecord> {
        self.records
            .iter()
            .find(|record| record.is_current_at_discovery())
    }

    /// Iterate in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanRecord> {
        self.records.iter()
    }

    /// Number of discovered plans.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when discovery found no plans.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlanSet {
    type Item = &'a PlanRecord;
    type IntoIter = std::slice::Iter<'a, PlanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
