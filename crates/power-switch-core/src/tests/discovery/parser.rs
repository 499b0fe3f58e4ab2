use crate::{
    PlanIndex,
    discovery::{parse_listing, parse_plan_line},
    tests::fakes::STOCK_LISTING,
};

/// WHAT: Plans are numbered from 1 in output order
/// WHY: Indices are the hotkey and menu identifiers and must be contiguous
#[test]
#[allow(clippy::unwrap_used)]
fn given_stock_listing_when_parsing_then_plans_indexed_in_order() {
    // Given: The listing of a stock Windows install

    // When: Parsing the listing
    let plans = parse_listing(STOCK_LISTING);

    // Then: Three plans, indexed 1..=3, names and GUIDs as printed
    let parsed: Vec<(u32, &str, &str)> = plans
        .iter()
        .map(|p| (p.index().get(), p.id(), p.name()))
        .collect();
    assert_eq!(
        parsed,
        vec![
            (1, "381b4222-f694-41f0-9685-ff5bb260df2e", "Balanced"),
            (2, "8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c", "High performance"),
            (3, "a1841308-3541-4fab-bc81-f71556f20b4a", "Power saver"),
        ]
    );
    assert_eq!(
        plans.current_at_discovery().unwrap().index(),
        PlanIndex::new(1).unwrap()
    );
}

/// WHAT: Current marker is evaluated per line
/// WHY: A `*` on one plan must not mark its neighbours as current
#[test]
#[allow(clippy::unwrap_used)]
fn given_marker_on_first_line_when_parsing_then_only_first_is_current() {
    // Given: Two plan lines, the first marked active
    let listing = "3a1e0c2d-1111-2222-3333-4444555566b2 (High performance) *\n\
                   4f2d9e8a-aaaa-bbbb-cccc-ddddeeee11c1 (Balanced)\n";

    // When: Parsing
    let plans = parse_listing(listing);

    // Then: Index 1 is current, index 2 is not
    let first = plans.by_event_id(1).unwrap();
    let second = plans.by_event_id(2).unwrap();
    assert_eq!(first.name(), "High performance");
    assert!(first.is_current_at_discovery());
    assert_eq!(second.name(), "Balanced");
    assert!(!second.is_current_at_discovery());
}

/// WHAT: Lines without a GUID or without a name group are skipped
/// WHY: Headers and diagnostics in the utility output must not crash or shift indices
#[test]
fn given_malformed_lines_when_parsing_then_they_are_excluded() {
    // Given: A header, a GUID without a name, a name without a GUID, a short GUID
    let listing = "Existing Power Schemes (* Active)\n\
                   Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e\n\
                   (Orphan name) *\n\
                   Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df (Short)\n\
                   Power Scheme GUID: 8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c  (High performance)\n";

    // When: Parsing
    let plans = parse_listing(listing);

    // Then: Only the well-formed line survives, as index 1
    assert_eq!(plans.len(), 1);
    assert_eq!(plans.by_event_id(1).map(|p| p.name()), Some("High performance"));
}

/// WHAT: Name is taken from the rightmost parenthesized group
/// WHY: Names containing parentheses must parse the same way every time
#[test]
#[allow(clippy::unwrap_used)]
fn given_name_with_nested_parentheses_when_parsing_then_rightmost_group_wins() {
    // Given: A plan whose name contains its own parentheses
    let line = "Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Gaming (quiet) mode) *";

    // When: Parsing the line
    let parsed = parse_plan_line(line).unwrap();

    // Then: The group opens at the last '(' and parentheses are removed
    assert_eq!(parsed.name, "quiet mode");
    assert!(parsed.is_current);
}

/// WHAT: A trailing unmatched '(' does not hide an earlier name group
/// WHY: The name group must end at a ')' after its '('
#[test]
#[allow(clippy::unwrap_used)]
fn given_trailing_open_parenthesis_when_parsing_then_earlier_group_used() {
    // Given: A line with a dangling '(' after the name
    let line = "381b4222-f694-41f0-9685-ff5bb260df2e (Balanced) (note";

    // When: Parsing the line
    let parsed = parse_plan_line(line).unwrap();

    // Then: The complete group is used and no marker is detected
    assert_eq!(parsed.name, "Balanced");
    assert!(!parsed.is_current);
}

/// WHAT: GUID case is preserved and hex matching is case-insensitive
/// WHY: The GUID is passed back to the utility exactly as it printed it
#[test]
#[allow(clippy::unwrap_used)]
fn given_uppercase_guid_when_parsing_then_case_preserved() {
    // Given: An upper-case GUID
    let line = "GUID: 8C5E7FDA-E8BF-4A96-9A85-A6E23A8C635C (High performance)";

    // When: Parsing the line
    let parsed = parse_plan_line(line).unwrap();

    // Then: The id is byte-for-byte what was printed
    assert_eq!(parsed.id, "8C5E7FDA-E8BF-4A96-9A85-A6E23A8C635C");
}

/// WHAT: Tokens with non-hex characters are not GUIDs
/// WHY: Only 8-4-4-4-12 hex tokens identify plans
#[test]
fn given_non_hex_token_when_parsing_then_line_skipped() {
    // Given: A GUID-shaped token containing 'z'
    let line = "GUID: 8c5e7fda-e8bf-4a96-9a85-a6e23a8c63zz (High performance)";

    // When: Parsing the line
    let parsed = parse_plan_line(line);

    // Then: No match
    assert!(parsed.is_none());
}

/// WHAT: Name group before the GUID is not used
/// WHY: The name must follow the identifier
#[test]
fn given_name_before_guid_when_parsing_then_line_skipped() {
    // Given: Parentheses only before the GUID
    let line = "(Balanced) 381b4222-f694-41f0-9685-ff5bb260df2e";

    // When: Parsing the line
    let parsed = parse_plan_line(line);

    // Then: No match
    assert!(parsed.is_none());
}

/// WHAT: Localized output with non-ASCII text still parses
/// WHY: Utility output is localized; the scanner must respect char boundaries
#[test]
#[allow(clippy::unwrap_used)]
fn given_localized_line_when_parsing_then_name_extracted() {
    // Given: A Japanese-localized plan line
    let line = "電源設定の GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (バランス) *";

    // When: Parsing the line
    let parsed = parse_plan_line(line).unwrap();

    // Then: GUID, name and marker are all recovered
    assert_eq!(parsed.id, "381b4222-f694-41f0-9685-ff5bb260df2e");
    assert_eq!(parsed.name, "バランス");
    assert!(parsed.is_current);
}

/// WHAT: Marker separated by extra whitespace still counts
/// WHY: Column padding differs between Windows builds
#[test]
#[allow(clippy::unwrap_used)]
fn given_marker_after_several_spaces_when_parsing_then_current() {
    // Given: Two spaces before the marker
    let line = "381b4222-f694-41f0-9685-ff5bb260df2e (Balanced)  *";

    // When: Parsing the line
    let parsed = parse_plan_line(line).unwrap();

    // Then: The plan is current
    assert!(parsed.is_current);
}

/// WHAT: Repeated GUIDs keep the first occurrence only
/// WHY: Plan ids must be unique within the frozen set
#[test]
fn given_duplicate_guid_when_parsing_then_second_skipped_and_indices_contiguous() {
    // Given: The same GUID twice, then a different plan
    let listing = "381b4222-f694-41f0-9685-ff5bb260df2e (Balanced)\n\
                   381B4222-F694-41F0-9685-FF5BB260DF2E (Balanced copy)\n\
                   a1841308-3541-4fab-bc81-f71556f20b4a (Power saver)\n";

    // When: Parsing
    let plans = parse_listing(listing);

    // Then: Two plans, indices 1 and 2 with no gap
    let names: Vec<(u32, &str)> = plans.iter().map(|p| (p.index().get(), p.name())).collect();
    assert_eq!(names, vec![(1, "Balanced"), (2, "Power saver")]);
}

/// WHAT: Empty and blank output yields no plans
/// WHY: Zero plans is a legal discovery result
#[test]
fn given_blank_output_when_parsing_then_empty_set() {
    // Given: Output made of line breaks and spaces
    let listing = "\r\n   \n\r\n";

    // When: Parsing
    let plans = parse_listing(listing);

    // Then: Nothing discovered
    assert!(plans.is_empty());
}
