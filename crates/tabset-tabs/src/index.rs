//! Index searches that skip disabled tabs

use crate::tab::TabRecord;

/// Closest index to `candidate` whose tab is enabled.
///
/// Searches outward one step at a time, trying `candidate + d` before
/// `candidate - d`, so among equally distant tabs the later one wins.
/// Returns `candidate` unchanged when no tab is enabled.
pub fn nearest_safe_index(candidate: usize, tabs: &[TabRecord]) -> usize {
    let enabled = |i: usize| tabs.get(i).is_some_and(|t| !t.disabled);
    let max_offset = tabs.len().saturating_sub(candidate).max(candidate);

    for distance in 0..=max_offset {
        if let Some(forward) = candidate.checked_add(distance) {
            if enabled(forward) {
                return forward;
            }
        }
        if let Some(back) = candidate.checked_sub(distance) {
            if enabled(back) {
                return back;
            }
        }
    }
    candidate
}

/// First enabled index reached by stepping from `start` by `delta`.
///
/// Stops at the ends of the collection without wrapping; `None` if the
/// boundary comes first or `delta` is zero.
pub fn step_to_enabled(start: usize, delta: isize, tabs: &[TabRecord]) -> Option<usize> {
    if delta == 0 {
        return None;
    }
    let mut index = start.checked_add_signed(delta)?;
    loop {
        let tab = tabs.get(index)?;
        if !tab.disabled {
            return Some(index);
        }
        index = index.checked_add_signed(delta)?;
    }
}
