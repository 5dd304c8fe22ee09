//! Roster-level conflict detection.
//!
//! Pairwise scan over a list of sections, reporting every pair whose
//! meetings collide and the days they collide on. Sections that share
//! no meeting day never conflict, whatever their times.
//!
//! Pairs are always compared on their actual day and time data, never
//! on section identity: two records with the same CRN are still
//! checked (duplicate records are [`validation`](crate::validation)'s
//! concern).

use tracing::debug;

use crate::models::{DayMask, Section};

/// A detected collision between two sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// CRN of the first section (roster order).
    pub crn_a: String,
    /// CRN of the second section.
    pub crn_b: String,
    /// Days on which the two sections' meetings collide.
    pub days: DayMask,
}

/// Finds every pairwise meeting collision in a roster.
///
/// Each unordered pair is reported at most once, in roster order.
pub fn find_conflicts(sections: &[Section]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            let days = a.conflicting_days(b);
            if !days.is_empty() {
                debug!(
                    crn_a = %a.crn(),
                    crn_b = %b.crn(),
                    days = %days,
                    "meeting collision"
                );
                conflicts.push(Conflict {
                    crn_a: a.crn().to_string(),
                    crn_b: b.crn().to_string(),
                    days,
                });
            }
        }
    }

    conflicts
}
