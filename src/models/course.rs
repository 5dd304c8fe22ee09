//! Course catalog record.
//!
//! A course is the catalog-level identity a section belongs to
//! ("CS 2114"). Sections hold one for rendering; conflict detection
//! never reads it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Subject code ("CS", "MATH").
    pub subject: String,
    /// Catalog number ("2114").
    pub number: String,
    /// Full catalog title.
    pub title: String,
}

impl Course {
    /// Creates a new course record.
    pub fn new(
        subject: impl Into<String>,
        number: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            number: number.into(),
            title: title.into(),
        }
    }

    /// Short catalog name ("CS 2114").
    pub fn short_name(&self) -> String {
        format!("{} {}", self.subject, self.number)
    }

    /// Catalog name with a section code appended ("CS 2114-A").
    pub fn with_section_code(&self, section_code: &str) -> String {
        format!("{}-{}", self.short_name(), section_code)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.short_name(), self.title)
    }
}
