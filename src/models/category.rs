//! Exam categories.
//!
//! A final-exam timetable groups sections into categories: every
//! section whose meeting days fit the category's day pattern and whose
//! class starts at the category's start time sits its final in the
//! category's exam slot.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DayMask, Section, TimeInterval, Weekday};

/// A final-exam category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category label ("MWF 9:00 block").
    pub name: String,
    /// Day pattern a section's meeting days must fit inside.
    pub pattern: DayMask,
    /// Class start time this category covers (raw HHMM).
    pub class_start: u16,
    /// Day the final is held.
    pub exam_day: Weekday,
    /// Exam sitting.
    pub exam_time: TimeInterval,
}

impl Category {
    /// Creates a new exam category.
    pub fn new(
        name: impl Into<String>,
        pattern: DayMask,
        class_start: u16,
        exam_day: Weekday,
        exam_time: TimeInterval,
    ) -> Self {
        Self {
            name: name.into(),
            pattern,
            class_start,
            exam_day,
            exam_time,
        }
    }

    /// Whether a section belongs in this category.
    ///
    /// The section's days must be a subset of the pattern (an MW class
    /// fits an MWF category) and its class start time must equal the
    /// category's start time.
    pub fn matches(&self, section: &Section) -> bool {
        section.matches_meeting_days(self.pattern) && section.start_time() == self.class_start
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.exam_time, self.exam_day)
    }
}
