use crate::{
    PlanDiscovery, PowerError,
    tests::fakes::{FakeUtility, Listing, STOCK_LISTING},
};

/// WHAT: Discovery returns the parsed plan set
/// WHY: Startup depends on a frozen, ordered plan list
#[test]
#[allow(clippy::unwrap_used)]
fn given_working_utility_when_discovering_then_plans_returned() {
    // Given: A utility printing the stock listing
    let utility = FakeUtility::listing(STOCK_LISTING);

    // When: Discovering
    let plans = PlanDiscovery::new(&utility).discover().unwrap();

    // Then: All three plans in order
    let names: Vec<&str> = plans.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Balanced", "High performance", "Power saver"]);
}

/// WHAT: Launch failure is a fatal discovery error
/// WHY: Without a plan list no index mapping can exist
#[test]
fn given_missing_utility_when_discovering_then_launch_error() {
    // Given: A utility that cannot be started
    let mut utility = FakeUtility::listing("");
    utility.listing = Listing::CannotLaunch;

    // When: Discovering
    let result = PlanDiscovery::new(&utility).discover();

    // Then: UtilityLaunchFailed naming the program
    match result {
        Err(PowerError::UtilityLaunchFailed { program, .. }) => {
            assert_eq!(program, "fake-powercfg");
        }
        other => unreachable!("expected UtilityLaunchFailed, got {other:?}"),
    }
}

/// WHAT: Abnormal exit with no output fails discovery
/// WHY: An empty failed listing must not masquerade as "zero plans"
#[test]
fn given_failed_exit_without_output_when_discovering_then_discovery_failed() {
    // Given: A utility that exits non-zero and prints nothing
    let mut utility = FakeUtility::listing("");
    utility.listing = Listing::Prints {
        stdout: String::new(),
        success: false,
    };

    // When: Discovering
    let result = PlanDiscovery::new(&utility).discover();

    // Then: DiscoveryFailed
    assert!(matches!(result, Err(PowerError::DiscoveryFailed { .. })));
}

/// WHAT: Abnormal exit after printing still yields the printed plans
/// WHY: Output was produced, so the listing is usable
#[test]
#[allow(clippy::unwrap_used)]
fn given_failed_exit_with_output_when_discovering_then_plans_parsed() {
    // Given: A non-zero exit with a full listing
    let mut utility = FakeUtility::listing("");
    utility.listing = Listing::Prints {
        stdout: STOCK_LISTING.to_string(),
        success: false,
    };

    // When: Discovering
    let plans = PlanDiscovery::new(&utility).discover().unwrap();

    // Then: Plans are still returned
    assert_eq!(plans.len(), 3);
}

/// WHAT: Successful exit with no plan lines gives an empty set
/// WHY: Zero plans is legal and must not abort startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_listing_without_plans_when_discovering_then_empty_set() {
    // Given: Only the header
    let utility = FakeUtility::listing("Existing Power Schemes (* Active)\r\n---\r\n");

    // When: Discovering
    let plans = PlanDiscovery::new(&utility).discover().unwrap();

    // Then: Empty
    assert!(plans.is_empty());
    assert!(plans.current_at_discovery().is_none());
}
