//! # Sequence Assignment
//!
//! Computes the 1-based display position of a series among the *active*
//! siblings of its event — active meaning the sibling's end date has not
//! yet passed. Completed series fall out of the numbering entirely, so
//! attendees always see "1, 2, 3, ..." over what is still to come.
//!
//! Ordering is ascending `(start_date, name)`; the name tie-break uses
//! case-folded comparison so "quarterfinals" and "Quarterfinals" sort
//! together regardless of how the organizer typed them.
//!
//! Pure functions of `(candidate, siblings, now)` — recomputed on every
//! keystroke of the series form with no persisted state.

use gala_core::{SeriesId, Timestamp};
use gala_state::Series;

/// Compute the sequence number a candidate window would receive among
/// `siblings`.
///
/// `exclude` removes the series being edited from the sibling set so it
/// does not compete with its own replacement window. Siblings whose end
/// date has passed at `now` are skipped before numbering.
pub fn compute_sequence_number(
    candidate_start: Timestamp,
    candidate_name: &str,
    siblings: &[Series],
    exclude: Option<SeriesId>,
    now: Timestamp,
) -> u32 {
    let candidate_key = sort_key(candidate_name);

    let mut earlier = 0u32;
    for sibling in siblings {
        if Some(sibling.id) == exclude || sibling.is_completed_at(now) {
            continue;
        }
        let ordering = sibling
            .start_date
            .cmp(&candidate_start)
            .then_with(|| sort_key(&sibling.name).cmp(&candidate_key));
        // Ties sort the existing sibling first; the candidate slots after.
        if ordering != std::cmp::Ordering::Greater {
            earlier += 1;
        }
    }

    earlier + 1
}

/// Renumber every active series of an event.
///
/// Returns `(id, sequence_number)` pairs in display order. Completed
/// series are absent from the result, not numbered zero — the caller
/// decides how to present history.
pub fn assign_sequence_numbers(siblings: &[Series], now: Timestamp) -> Vec<(SeriesId, u32)> {
    let mut active: Vec<&Series> = siblings
        .iter()
        .filter(|s| !s.is_completed_at(now))
        .collect();
    active.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| sort_key(&a.name).cmp(&sort_key(&b.name)))
    });
    active
        .iter()
        .enumerate()
        .map(|(index, series)| (series.id, index as u32 + 1))
        .collect()
}

/// Case-folded tie-break key for name comparison.
fn sort_key(name: &str) -> String {
    name.to_lowercase()
}

// ─── Tests ───────────────────────────────────────────────────────────
