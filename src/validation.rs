//! Roster integrity checks.
//!
//! Validates a list of sections before exam scheduling. Detects:
//! - Duplicate CRNs (case-insensitive, matching section identity)
//! - Sections with no recognized meeting days
//! - Sections with no exam category assigned
//!
//! These are roster-level checks. Section construction stays
//! permissive about stray day letters; a section that ends up with an
//! empty meeting pattern is surfaced here instead of failing there.

use std::collections::HashSet;

use tracing::debug;

use crate::models::Section;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two sections share a CRN.
    DuplicateCrn,
    /// A section's day string contained no recognized day letters.
    NoMeetingDays,
    /// A section has no exam category assigned.
    MissingCategory,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster of sections.
///
/// Checks:
/// 1. No duplicate CRNs
/// 2. Every section meets on at least one recognized day
/// 3. Every section has an exam category assigned
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(sections: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut crns = HashSet::new();
    for section in sections {
        if !crns.insert(section.crn().to_ascii_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCrn,
                format!("Duplicate CRN: {}", section.crn()),
            ));
        }

        if section.days().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoMeetingDays,
                format!("Section {} has no recognized meeting days", section.crn()),
            ));
        }

        if section.category().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingCategory,
                format!("Section {} has no exam category", section.crn()),
            ));
        }
    }

    debug!(
        sections = sections.len(),
        errors = errors.len(),
        "roster validated"
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
