//! Class section model.
//!
//! A section is one scheduled offering of a course: who teaches it,
//! when it meets, and (once assigned) which exam category it falls in.
//! The CRN is the section's identity. Two records with the same CRN
//! are the same section even when their meeting patterns differ, which
//! is what lets split lecture/lab records re-merge upstream.
//!
//! # Meeting Times
//! Every day a section meets maps to its own [`TimeInterval`].
//! Construction stamps one interval across all day letters, so a fresh
//! section meets at the same time every day; [`Section::add_lab`] can
//! then fold in days with different times.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

use super::{Category, Course, DayMask, TimeInterval, Weekday};

/// Error raised when section inputs fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// A constructor input was blank or a time was out of range.
    #[error("invalid section input: {0}")]
    InvalidSection(String),
}

/// One scheduled offering of a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    course: Course,
    instructor: String,
    crn: String,
    section_code: String,
    start_time: u16,
    end_time: u16,
    days: DayMask,
    times: BTreeMap<Weekday, TimeInterval>,
    category: Option<Category>,
}

impl Section {
    /// Builds a section from registrar fields.
    ///
    /// `days` is the raw day-letter string. Unrecognized letters are
    /// skipped without error, so "MQ" yields a Monday-only section and
    /// a string with no recognized letters yields a section with no
    /// meeting days. Duplicate letters are no-ops.
    ///
    /// Fails with [`SectionError::InvalidSection`] when any text field
    /// is blank, a time exceeds 2400, or the end time does not come
    /// after the start. No partial section is ever produced.
    pub fn new(
        course: Course,
        instructor: impl Into<String>,
        crn: impl Into<String>,
        section_code: impl Into<String>,
        start_time: u16,
        end_time: u16,
        days: &str,
    ) -> Result<Self, SectionError> {
        let instructor = instructor.into();
        let crn = crn.into();
        let section_code = section_code.into();

        if instructor.is_empty() {
            return Err(SectionError::InvalidSection("instructor is blank".into()));
        }
        if crn.is_empty() {
            return Err(SectionError::InvalidSection("CRN is blank".into()));
        }
        if section_code.is_empty() {
            return Err(SectionError::InvalidSection(
                "section code is blank".into(),
            ));
        }
        if days.is_empty() {
            return Err(SectionError::InvalidSection("day string is blank".into()));
        }
        if start_time > 2400 || end_time > 2400 {
            return Err(SectionError::InvalidSection(format!(
                "time outside 0..=2400: {start_time} - {end_time}"
            )));
        }
        if end_time <= start_time {
            return Err(SectionError::InvalidSection(format!(
                "end time {end_time} not after start time {start_time}"
            )));
        }

        let mut times = BTreeMap::new();
        let mut mask = DayMask::EMPTY;
        for day in days.chars().filter_map(Weekday::from_letter) {
            times
                .entry(day)
                .or_insert(TimeInterval::new(start_time, end_time));
            mask = mask.with(day);
        }

        Ok(Self {
            course,
            instructor,
            crn,
            section_code,
            start_time,
            end_time,
            days: mask,
            times,
            category: None,
        })
    }

    /// The catalog course this section offers.
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Instructor of record.
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Course registration number, the section's identity.
    pub fn crn(&self) -> &str {
        &self.crn
    }

    /// Section code within the course ("A", "02").
    pub fn section_code(&self) -> &str {
        &self.section_code
    }

    /// Class start time from construction (raw HHMM).
    ///
    /// Stays at the constructor value even after lab merges; exam
    /// category assignment keys off it.
    pub fn start_time(&self) -> u16 {
        self.start_time
    }

    /// Class end time from construction (raw HHMM).
    pub fn end_time(&self) -> u16 {
        self.end_time
    }

    /// Days this section meets.
    pub fn days(&self) -> DayMask {
        self.days
    }

    /// Canonical meeting-days string ("MWF").
    pub fn meeting_days_code(&self) -> String {
        self.days.to_letters()
    }

    /// Meeting interval on a given day, if the section meets then.
    pub fn interval_on(&self, day: Weekday) -> Option<TimeInterval> {
        self.times.get(&day).copied()
    }

    /// Assigned exam category, if any.
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Assigns the exam category. The only mutation besides
    /// [`add_lab`](Self::add_lab).
    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    /// Final-exam slot from the assigned category, if one is set.
    pub fn final_exam(&self) -> Option<(Weekday, TimeInterval)> {
        self.category.as_ref().map(|c| (c.exam_day, c.exam_time))
    }

    /// Folds a lab (or other secondary meeting record) into this
    /// section.
    ///
    /// Only days absent from this section are copied in; a day the
    /// lecture already meets keeps its interval no matter what the lab
    /// claims. The day mask becomes the union of both.
    pub fn add_lab(&mut self, lab: &Section) {
        for (day, interval) in &lab.times {
            self.times.entry(*day).or_insert(*interval);
        }
        self.days = self.days.union(lab.days);
    }

    /// Whether this section's meetings collide with another's.
    ///
    /// Checks every day both sections meet and short-circuits on the
    /// first collision. Interval collision is evaluated in both
    /// directions because the endpoint test alone misses strict
    /// containment (see [`TimeInterval::overlaps`]). Sections sharing
    /// no meeting day never conflict, whatever their times.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        for (day, theirs) in &other.times {
            if let Some(ours) = self.times.get(day) {
                if ours.overlaps(theirs) || theirs.overlaps(ours) {
                    return true;
                }
            }
        }
        false
    }

    /// Days on which this section's meetings collide with another's.
    ///
    /// Same per-day rule as [`conflicts_with`](Self::conflicts_with),
    /// collected instead of short-circuited.
    pub fn conflicting_days(&self, other: &Section) -> DayMask {
        let mut mask = DayMask::EMPTY;
        for (day, theirs) in &other.times {
            if let Some(ours) = self.times.get(day) {
                if ours.overlaps(theirs) || theirs.overlaps(ours) {
                    mask = mask.with(*day);
                }
            }
        }
        mask
    }

    /// Whether this section's meeting days fit inside `mask`.
    ///
    /// Subset semantics: every day this section meets must be in
    /// `mask`. Exam-category assignment calls this with each
    /// category's day pattern.
    pub fn matches_meeting_days(&self, mask: DayMask) -> bool {
        self.days.is_subset_of(mask)
    }

    /// Renders every meeting day with its time range
    /// ("M: 9:00 - 9:50  W: 9:00 - 9:50").
    pub fn times_summary(&self) -> String {
        self.times
            .iter()
            .map(|(day, interval)| format!("{}: {}", day.to_letter(), interval))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

// Identity is the CRN alone, case-insensitively. Meeting pattern is
// deliberately excluded so split lecture/lab records dedup to one
// section; conflict checks still read the real day and time data.
impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.crn.eq_ignore_ascii_case(&other.crn)
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.crn.to_ascii_lowercase().hash(state);
    }
}

impl Ord for Section {
    fn cmp(&self, other: &Self) -> Ordering {
        // Case-insensitive to stay consistent with equality.
        let a = self.crn.bytes().map(|b| b.to_ascii_lowercase());
        let b = other.crn.bytes().map(|b| b.to_ascii_lowercase());
        a.cmp(b)
    }
}

impl PartialOrd for Section {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.crn,
            self.course.with_section_code(&self.section_code),
            self.instructor,
            self.times_summary()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cs_course() -> Course {
        Course::new("CS", "2114", "Software Design and Data Structures")
    }

    fn section(crn: &str, days: &str, start: u16, end: u16) -> Section {
        Section::new(cs_course(), "Rivera", crn, "A", start, end, days).unwrap()
    }

    #[test]
    fn test_construction_stamps_every_day() {
        let s = section("90210", "MWF", 900, 950);
        assert_eq!(s.meeting_days_code(), "MWF");
        for day in [Weekday::Monday, Weekday::Wednesday, Weekday::Friday] {
            assert_eq!(s.interval_on(day), Some(TimeInterval::new(900, 950)));
        }
        assert_eq!(s.interval_on(Weekday::Tuesday), None);
        assert_eq!(s.start_time(), 900);
        assert_eq!(s.end_time(), 950);
    }

    #[test]
    fn test_construction_rejects_bad_input() {
        let err = Section::new(cs_course(), "Rivera", "90210", "A", 1000, 900, "MWF");
        assert!(matches!(err, Err(SectionError::InvalidSection(_))));

        assert!(Section::new(cs_course(), "Rivera", "90210", "A", 900, 900, "MWF").is_err());
        assert!(Section::new(cs_course(), "Rivera", "90210", "A", 900, 2500, "MWF").is_err());
        assert!(Section::new(cs_course(), "Rivera", "90210", "A", 900, 950, "").is_err());
        assert!(Section::new(cs_course(), "", "90210", "A", 900, 950, "MWF").is_err());
        assert!(Section::new(cs_course(), "Rivera", "", "A", 900, 950, "MWF").is_err());
        assert!(Section::new(cs_course(), "Rivera", "90210", "", 900, 950, "MWF").is_err());
    }

    #[test]
    fn test_stray_day_letters_are_ignored() {
        let s = section("90210", "MQ", 900, 950);
        assert_eq!(s.meeting_days_code(), "M");
        assert_eq!(s.interval_on(Weekday::Monday), Some(TimeInterval::new(900, 950)));

        // A day string with nothing recognized still constructs.
        let none = section("90211", "Q", 900, 950);
        assert!(none.days().is_empty());
    }

    #[test]
    fn test_duplicate_day_letters_are_idempotent() {
        let s = section("90210", "MMW", 900, 950);
        assert_eq!(s.meeting_days_code(), "MW");
        assert_eq!(s.days().len(), 2);
    }

    #[test]
    fn test_equality_is_crn_only() {
        let a = section("90210", "MWF", 900, 950);
        let b = section("90210", "TR", 1200, 1315);
        let c = section("90211", "MWF", 900, 950);

        assert_eq!(a, b); // same CRN, different pattern
        assert_ne!(a, c);

        // Case-insensitive, like the registrar's own matching.
        let upper = section("4LAB1", "F", 1300, 1500);
        let lower = section("4lab1", "F", 1300, 1500);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(section("4LAB1", "MWF", 900, 950));
        set.insert(section("4lab1", "TR", 1200, 1315));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_by_crn() {
        let mut roster = vec![
            section("90212", "MWF", 900, 950),
            section("90210", "TR", 1200, 1315),
            section("90211", "MW", 1400, 1515),
        ];
        roster.sort();
        let crns: Vec<&str> = roster.iter().map(Section::crn).collect();
        assert_eq!(crns, vec!["90210", "90211", "90212"]);
    }

    #[test]
    fn test_equal_sections_still_check_real_times() {
        // Equality never short-circuits conflict detection.
        let a = section("90210", "MWF", 900, 950);
        let apart = section("90210", "MWF", 1400, 1515);
        assert!(!a.conflicts_with(&apart));

        let together = section("90210", "MWF", 930, 1020);
        assert!(a.conflicts_with(&together));
    }

    #[test]
    fn test_conflict_requires_shared_day() {
        let mwf = section("90210", "MWF", 900, 950);
        let tr = section("90211", "TR", 900, 950);
        assert!(!mwf.conflicts_with(&tr));
        assert!(!tr.conflicts_with(&mwf));
    }

    #[test]
    fn test_back_to_back_is_a_conflict() {
        let early = section("90210", "M", 900, 1000);
        let late = section("90211", "M", 1000, 1100);
        assert!(early.conflicts_with(&late));
        assert!(late.conflicts_with(&early));
    }

    #[test]
    fn test_containment_conflicts_both_ways() {
        // One interval strictly inside the other still conflicts,
        // whichever section asks.
        let inner = section("90210", "W", 1000, 1030);
        let outer = section("90211", "W", 900, 1200);
        assert!(inner.conflicts_with(&outer));
        assert!(outer.conflicts_with(&inner));
    }

    #[test]
    fn test_conflicting_days_collects_each_day() {
        let a = section("90210", "MWF", 900, 950);
        let mut b = section("90211", "MF", 930, 1020);
        assert_eq!(a.conflicting_days(&b), DayMask::from_letters("MF"));

        b = section("90211", "TR", 930, 1020);
        assert!(a.conflicting_days(&b).is_empty());
    }

    #[test]
    fn test_add_lab_merges_without_overwriting() {
        let mut lecture = section("90210", "MW", 900, 950);
        let lab = section("90210", "F", 1300, 1500);

        lecture.add_lab(&lab);
        assert_eq!(lecture.meeting_days_code(), "MWF");
        assert_eq!(
            lecture.interval_on(Weekday::Friday),
            Some(TimeInterval::new(1300, 1500))
        );

        // A second lab claiming Monday at a different time loses:
        // the lecture's existing Monday interval stands.
        let second_lab = section("90210", "M", 1600, 1750);
        lecture.add_lab(&second_lab);
        assert_eq!(
            lecture.interval_on(Weekday::Monday),
            Some(TimeInterval::new(900, 950))
        );
        assert_eq!(lecture.meeting_days_code(), "MWF");
    }

    #[test]
    fn test_add_lab_keeps_constructor_times() {
        let mut lecture = section("90210", "MW", 900, 950);
        let lab = section("90210", "F", 1300, 1500);
        lecture.add_lab(&lab);
        assert_eq!(lecture.start_time(), 900);
        assert_eq!(lecture.end_time(), 950);
    }

    #[test]
    fn test_matches_meeting_days() {
        let s = section("90210", "MW", 900, 950);
        assert!(s.matches_meeting_days(DayMask::from_letters("MWF")));
        assert!(s.matches_meeting_days(DayMask::from_letters("MW")));
        assert!(!s.matches_meeting_days(DayMask::from_letters("M")));
        assert!(!s.matches_meeting_days(DayMask::from_letters("TR")));
    }

    #[test]
    fn test_category_assignment() {
        let mut s = section("90210", "MWF", 900, 950);
        assert!(s.category().is_none());
        assert!(s.final_exam().is_none());

        s.set_category(Category::new(
            "MWF 9:00 block",
            DayMask::from_letters("MWF"),
            900,
            Weekday::Friday,
            TimeInterval::new(800, 1000),
        ));
        assert_eq!(
            s.final_exam(),
            Some((Weekday::Friday, TimeInterval::new(800, 1000)))
        );
    }

    #[test]
    fn test_times_summary_and_display() {
        let mut s = section("90210", "MW", 900, 950);
        s.add_lab(&section("90210", "F", 1300, 1500));
        assert_eq!(
            s.times_summary(),
            "M: 9:00 - 9:50  W: 9:00 - 9:50  F: 13:00 - 15:00"
        );
        assert!(s.to_string().starts_with("90210: CS 2114-A Rivera"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut s = section("90210", "MW", 900, 950);
        s.add_lab(&section("90210", "F", 1300, 1500));

        let json = serde_json::to_string(&s).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back.meeting_days_code(), "MWF");
        assert_eq!(back.interval_on(Weekday::Friday), s.interval_on(Weekday::Friday));
    }
}
