//! Input validation for matching runs.
//!
//! Checks structural integrity of the candidate pool and the owner list
//! before the engine runs. Detects:
//! - Duplicate candidate or owner names (names key the commitment lists)
//! - Availability maps that are not total over the event days
//! - Meetings scheduled outside the event days
//! - A scheduled owner list with an empty candidate pool

use chrono::NaiveDate;

use crate::models::{Candidate, MeetingOwner};
use std::collections::HashSet;

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

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two candidates or two owners share the same name.
    DuplicateName,
    /// A candidate's availability map is missing an event day.
    IncompleteAvailability,
    /// An owner's meeting falls on a day outside the event.
    MeetingOutsideEvent,
    /// Owners have scheduled meetings but no candidates exist.
    EmptyCandidatePool,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a matching run.
///
/// Checks:
/// 1. No duplicate candidate names
/// 2. No duplicate owner names
/// 3. Every candidate's availability map covers every event day
/// 4. Every scheduled meeting falls on an event day
/// 5. Scheduled owners imply a non-empty candidate pool
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    candidates: &[Candidate],
    owners: &[MeetingOwner],
    event_days: &[NaiveDate],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut candidate_names = HashSet::new();
    for c in candidates {
        if !candidate_names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate candidate name: {}", c.name),
            ));
        }
        for day in event_days {
            if !c.availability.contains_key(day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompleteAvailability,
                    format!("Candidate {} has no availability entry for {day}", c.name),
                ));
            }
        }
    }

    let mut owner_names = HashSet::new();
    let mut any_scheduled = false;
    for o in owners {
        if !owner_names.insert(o.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate owner name: {}", o.name),
            ));
        }
        if let Some(ts) = o.timeslot {
            any_scheduled = true;
            if !event_days.contains(&ts.date()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MeetingOutsideEvent,
                    format!(
                        "Meeting for {} on {} is outside the event days",
                        o.name,
                        ts.date()
                    ),
                ));
            }
        }
    }

    if any_scheduled && candidates.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCandidatePool,
            "Scheduled meetings exist but the candidate pool is empty",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days() -> Vec<NaiveDate> {
        (24..=25)
            .map(|d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap())
            .collect()
    }

    fn full_candidate(name: &str) -> Candidate {
        let mut c = Candidate::new(name).with_province("Ontario");
        for day in days() {
            c.availability.insert(day, true);
        }
        c
    }

    #[test]
    fn test_valid_input() {
        let ts = days()[0].and_hms_opt(10, 0, 0).unwrap();
        let candidates = vec![full_candidate("Ada"), full_candidate("Grace")];
        let owners = vec![MeetingOwner::new("MP Smith").with_timeslot(ts)];
        assert!(validate_input(&candidates, &owners, &days()).is_ok());
    }

    #[test]
    fn test_duplicate_candidate_name() {
        let candidates = vec![full_candidate("Ada"), full_candidate("Ada")];
        let errors = validate_input(&candidates, &[], &days()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_incomplete_availability() {
        let candidates = vec![Candidate::new("Ada")];
        let errors = validate_input(&candidates, &[], &days()).unwrap_err();
        let missing = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::IncompleteAvailability)
            .count();
        assert_eq!(missing, 2);
    }

    #[test]
    fn test_meeting_outside_event() {
        let off_day = NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let candidates = vec![full_candidate("Ada")];
        let owners = vec![MeetingOwner::new("MP Smith").with_timeslot(off_day)];
        let errors = validate_input(&candidates, &owners, &days()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MeetingOutsideEvent));
    }

    #[test]
    fn test_empty_pool_with_scheduled_owners() {
        let ts = days()[0].and_hms_opt(10, 0, 0).unwrap();
        let owners = vec![MeetingOwner::new("MP Smith").with_timeslot(ts)];
        let errors = validate_input(&[], &owners, &days()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCandidatePool));
    }

    #[test]
    fn test_unscheduled_owner_needs_no_pool() {
        let owners = vec![MeetingOwner::new("MP NoSlot")];
        assert!(validate_input(&[], &owners, &days()).is_ok());
    }
}
