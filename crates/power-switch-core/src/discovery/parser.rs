//! Line scanner for the power utility's plan listing.
//!
//! A plan line looks like
//! `Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced) *`:
//! a GUID token, arbitrary text, a parenthesized name and an optional `*`
//! marking the active plan. Anything else (headers, localized banners,
//! diagnostics) is skipped.

use crate::{PlanIndex, PlanRecord, PlanSet};

use std::collections::HashSet;

use tracing::{trace, warn};
use uuid::Uuid;

/// Length of a hyphenated GUID (8-4-4-4-12).
const GUID_LEN: usize = 36;

const CURRENT_MARKER: char = '*';

/// Fields captured from one plan line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanLine<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: String,
    pub(crate) is_current: bool,
}

/// Parse a single listing line. Returns `None` when the line lacks a GUID
/// token or a parenthesized name after it.
///
/// The name is the rightmost group: it closes at the last `)` on the line and
/// opens at the nearest `(` before that. A name such as `My (fancy) plan`
/// therefore captures `(fancy) plan)`, and parentheses are then removed.
pub(crate) fn parse_plan_line(line: &str) -> Option<PlanLine<'_>> {
    let (start, end) = find_guid(line)?;
    let id = &line[start..end];
    let rest = &line[end..];

    let close = rest.rfind(')')?;
    let open = rest[..close].rfind('(')?;

    let name = rest[open..=close]
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .collect();

    let is_current = rest[close + 1..]
        .trim_start()
        .starts_with(CURRENT_MARKER);

    Some(PlanLine {
        id,
        name,
        is_current,
    })
}

/// Parse the full listing into a frozen plan set, numbering plans from 1 in
/// output order.
pub(crate) fn parse_listing(text: &str) -> PlanSet {
    let mut records: Vec<PlanRecord> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for line in text.split(['\r', '\n']).filter(|l| !l.trim().is_empty()) {
        let Some(parsed) = parse_plan_line(line) else {
            trace!(line, "Skipping non-plan line");
            continue;
        };

        if !seen.insert(parsed.id.to_ascii_lowercase()) {
            warn!(plan_id = parsed.id, "Duplicate plan GUID in listing, skipping");
            continue;
        }

        let Some(index) = u32::try_from(records.len() + 1)
            .ok()
            .and_then(PlanIndex::new)
        else {
            warn!("Plan index space exhausted, ignoring remaining lines");
            break;
        };

        records.push(PlanRecord::new(
            index,
            parsed.id,
            parsed.name,
            parsed.is_current,
        ));
    }

    PlanSet::from_records(records)
}

/// Byte range of the leftmost GUID-shaped token.
///
/// A successful ASCII parse means the window starts and ends on char
/// boundaries, so slicing `line` with the result is safe.
fn find_guid(line: &str) -> Option<(usize, usize)> {
    let bytes = line.as_bytes();
    let last_start = bytes.len().checked_sub(GUID_LEN)?;

    (0..=last_start)
        .find(|&start| is_hyphenated_guid(&bytes[start..start + GUID_LEN]))
        .map(|start| (start, start + GUID_LEN))
}

fn is_hyphenated_guid(candidate: &[u8]) -> bool {
    // 36 bytes only parse in the hyphenated form.
    candidate[0].is_ascii_hexdigit() && Uuid::try_parse_ascii(candidate).is_ok()
}
