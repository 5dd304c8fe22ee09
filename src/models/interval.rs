//! Meeting time interval.
//!
//! Times are the registrar's raw 24-hour HHMM integers (930, 1445).
//! They are compared as plain integers, never converted to minutes:
//! the span from 959 to 1000 is 41 raw units, and every consumer of
//! these values relies on the same raw ordering.
//!
//! # Boundary Rules
//! Collision ([`TimeInterval::overlaps`]) is closed on both ends, so
//! back-to-back classes collide. Point queries
//! ([`TimeInterval::contains`]) are half-open. The two rules differ
//! and both are load-bearing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A class meeting interval in raw HHMM encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Start time (HHMM).
    pub start: u16,
    /// End time (HHMM). Always after `start` for intervals built by
    /// section construction.
    pub end: u16,
}

impl TimeInterval {
    /// Creates a new interval. Bounds are validated where sections are
    /// constructed, not here.
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Whether `other` collides with this interval.
    ///
    /// True when either endpoint of `other` lands inside
    /// `[self.start, self.end]`, closed on BOTH ends: a class ending at
    /// 1100 collides with one starting at 1100.
    ///
    /// Not symmetric when `other` strictly contains `self`; conflict
    /// checks evaluate both directions (see
    /// [`Section::conflicts_with`](super::Section::conflicts_with)).
    #[inline]
    pub const fn overlaps(&self, other: &TimeInterval) -> bool {
        (other.start >= self.start && other.start <= self.end)
            || (other.end >= self.start && other.end <= self.end)
    }

    /// Whether a single point in time falls inside this interval.
    ///
    /// Half-open: the end time itself is outside. A 900-1000 class is
    /// no longer in session at 1000. Different boundary rule from
    /// [`overlaps`](Self::overlaps).
    #[inline]
    pub const fn contains(&self, time: u16) -> bool {
        time >= self.start && time < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_hhmm(self.start), format_hhmm(self.end))
    }
}

/// Formats a raw HHMM integer as "H:MM" (930 renders as "9:30").
pub fn format_hhmm(time: u16) -> String {
    format!("{}:{:02}", time / 100, time % 100)
}
