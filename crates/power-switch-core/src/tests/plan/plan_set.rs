use crate::{PlanIndex, discovery::parse_listing, tests::fakes::STOCK_LISTING};

/// WHAT: Lookup by event id finds the plan with that index
/// WHY: Hotkey and menu events carry only the index
#[test]
#[allow(clippy::unwrap_used)]
fn given_valid_event_id_when_looking_up_then_matching_plan() {
    // Given: The stock plan set
    let plans = parse_listing(STOCK_LISTING);

    // When: Looking up index 2
    let plan = plans.by_event_id(2).unwrap();

    // Then: The second listed plan
    assert_eq!(plan.index(), PlanIndex::new(2).unwrap());
    assert_eq!(plan.name(), "High performance");
}

/// WHAT: Zero and out-of-range ids resolve to nothing
/// WHY: Foreign or stale events must not alias a plan
#[test]
fn given_unknown_event_ids_when_looking_up_then_none() {
    // Given: The stock plan set
    let plans = parse_listing(STOCK_LISTING);

    // When/Then: 0, 4 and u32::MAX are unknown
    assert!(plans.by_event_id(0).is_none());
    assert!(plans.by_event_id(4).is_none());
    assert!(plans.by_event_id(u32::MAX).is_none());
}

/// WHAT: Plan index rejects zero
/// WHY: Indices are 1-based
#[test]
fn given_zero_when_creating_index_then_none() {
    // Given/When: Raw zero
    let index = PlanIndex::new(0);

    // Then: Not a valid index
    assert!(index.is_none());
}

/// WHAT: Display form lists index, name, id and current flag
/// WHY: Used in log output for discovered plans
#[test]
#[allow(clippy::unwrap_used)]
fn given_plan_when_formatting_then_colon_separated_fields() {
    // Given: The first stock plan
    let plans = parse_listing(STOCK_LISTING);
    let plan = plans.by_event_id(1).unwrap();

    // When: Formatting
    let text = plan.to_string();

    // Then: index:name:id:current
    assert_eq!(text, "1:Balanced:381b4222-f694-41f0-9685-ff5bb260df2e:true");
}
