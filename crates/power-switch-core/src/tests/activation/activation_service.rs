use crate::{
    Activate, ActivationService, PowerError,
    discovery::parse_listing,
    tests::fakes::{FakeUtility, RecordingPresenter, STOCK_LISTING},
};

/// WHAT: Activation passes the plan GUID to the utility and confirms
/// WHY: The user sees which plan became active
#[test]
#[allow(clippy::unwrap_used)]
fn given_launchable_utility_when_activating_then_guid_passed_and_confirmed() {
    // Given: A working utility and the stock plans
    let plans = parse_listing(STOCK_LISTING);
    let plan = plans.by_event_id(2).unwrap();
    let service = ActivationService::new(FakeUtility::listing(""), RecordingPresenter::default());

    // When: Activating plan 2
    let receipt = service.activate(plan).unwrap();

    // Then: GUID forwarded, confirmation shown with the plan name
    assert_eq!(receipt.plan, *plan);
    assert_eq!(
        *service.utility().activated.borrow(),
        vec!["8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c"]
    );
    assert_eq!(receipt.exit_code, Some(0));
    assert_eq!(*service.presenter().confirmed.borrow(), vec!["High performance"]);
    assert_eq!(*service.presenter().failures.borrow(), 0);
}

/// WHAT: Non-zero exit still counts as a launched switch
/// WHY: Only launch failure is an activation error
#[test]
#[allow(clippy::unwrap_used)]
fn given_utility_exiting_nonzero_when_activating_then_success_reported() {
    // Given: A utility that launches but exits with 1
    let plans = parse_listing(STOCK_LISTING);
    let plan = plans.by_event_id(1).unwrap();
    let mut utility = FakeUtility::listing("");
    utility.set_active_success = false;
    let service = ActivationService::new(utility, RecordingPresenter::default());

    // When: Activating
    let receipt = service.activate(plan).unwrap();

    // Then: Receipt carries the exit code, confirmation shown
    assert_eq!(receipt.exit_code, Some(1));
    assert_eq!(service.presenter().confirmed.borrow().len(), 1);
}

/// WHAT: Launch failure yields ActivationFailed and a visible failure
/// WHY: A failed switch must never be a silent no-op
#[test]
#[allow(clippy::unwrap_used)]
fn given_unlaunchable_utility_when_activating_then_error_and_failure_reported() {
    // Given: A utility that cannot be launched
    let plans = parse_listing(STOCK_LISTING);
    let plan = plans.by_event_id(3).unwrap();
    let mut utility = FakeUtility::listing("");
    utility.set_active_launches = false;
    let service = ActivationService::new(utility, RecordingPresenter::default());

    // When: Activating
    let result = service.activate(plan);

    // Then: Error carries the plan, presenter notified, nothing confirmed
    match result {
        Err(PowerError::ActivationFailed { plan: failed, .. }) => {
            assert_eq!(failed.name(), "Power saver");
        }
        other => unreachable!("expected ActivationFailed, got {other:?}"),
    }
    assert_eq!(*service.presenter().failures.borrow(), 1);
    assert!(service.presenter().confirmed.borrow().is_empty());
}

/// WHAT: Repeated activation of the same plan launches the utility each time
/// WHY: No single-flight guard; each request runs independently
#[test]
#[allow(clippy::unwrap_used)]
fn given_same_plan_twice_when_activating_then_two_launches() {
    // Given: A working utility
    let plans = parse_listing(STOCK_LISTING);
    let plan = plans.by_event_id(1).unwrap();
    let utility = FakeUtility::listing("");
    let service = ActivationService::new(utility, RecordingPresenter::default());

    // When: Activating twice
    service.activate(plan).unwrap();
    service.activate(plan).unwrap();

    // Then: Two launches, two confirmations
    assert_eq!(service.utility().activated.borrow().len(), 2);
    assert_eq!(service.presenter().confirmed.borrow().len(), 2);
}
