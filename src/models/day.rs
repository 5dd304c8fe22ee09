//! Meeting-day model.
//!
//! Classes meet on some subset of the five instructional weekdays.
//! Registrar data encodes the pattern as a letter string ("MWF", "TR"),
//! with 'R' standing for Thursday so it cannot be confused with Tuesday.
//! [`DayMask`] packs a pattern into a bitset for cheap union and subset
//! tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// An instructional weekday (Monday through Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in canonical order (Monday first).
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Parses a registrar day letter. 'R' is Thursday.
    ///
    /// Returns `None` for any other character; callers skip what they
    /// don't recognize rather than failing.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'M' => Some(Weekday::Monday),
            'T' => Some(Weekday::Tuesday),
            'W' => Some(Weekday::Wednesday),
            'R' => Some(Weekday::Thursday),
            'F' => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// The registrar letter for this day.
    pub fn to_letter(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
        }
    }

    /// Bit assigned to this day in a [`DayMask`].
    ///
    /// Monday owns the high bit (16) down to Friday at 1, the fixed
    /// encoding registrar exports use.
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Weekday::Monday => 16,
            Weekday::Tuesday => 8,
            Weekday::Wednesday => 4,
            Weekday::Thursday => 2,
            Weekday::Friday => 1,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        f.write_str(name)
    }
}

/// Bitset over the five instructional weekdays.
///
/// Only the five [`Weekday`] bits can ever be set: the constructors are
/// letter parsing, explicit day lists, and unions of existing masks.
/// Serializes as its canonical letter string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct DayMask(u8);

impl DayMask {
    /// Mask with no days set.
    pub const EMPTY: DayMask = DayMask(0);

    /// Builds a mask from a registrar day string ("MWF", "TR").
    ///
    /// Unrecognized characters are skipped without error; upstream data
    /// carries the occasional stray character. An empty string yields
    /// the empty mask.
    pub fn from_letters(s: &str) -> Self {
        s.chars()
            .filter_map(Weekday::from_letter)
            .fold(Self::EMPTY, |mask, day| mask.with(day))
    }

    /// Builds a mask from explicit days.
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().fold(Self::EMPTY, |mask, &day| mask.with(day))
    }

    /// Returns this mask with `day` added.
    #[inline]
    pub const fn with(self, day: Weekday) -> Self {
        DayMask(self.0 | day.bit())
    }

    /// Set-union of two masks.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        DayMask(self.0 | other.0)
    }

    /// Whether `day` is in this mask.
    #[inline]
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Whether every day in this mask is also in `other`.
    ///
    /// Subset semantics, not symmetric intersection: an MW pattern is a
    /// subset of MWF, but MWF is not a subset of MW. Exam-category
    /// assignment relies on this direction.
    #[inline]
    pub const fn is_subset_of(self, other: Self) -> bool {
        other.0 & self.0 == self.0
    }

    /// Whether no days are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of days set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Days in this mask, in canonical Monday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Renders the canonical letter string (fixed M,T,W,R,F order).
    ///
    /// Original input order is not preserved, but the result parses
    /// back to the same mask.
    pub fn to_letters(self) -> String {
        self.iter().map(Weekday::to_letter).collect()
    }
}

impl BitOr for DayMask {
    type Output = DayMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl From<DayMask> for String {
    fn from(mask: DayMask) -> String {
        mask.to_letters()
    }
}

impl From<String> for DayMask {
    fn from(s: String) -> DayMask {
        DayMask::from_letters(&s)
    }
}

impl fmt::Display for DayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}
