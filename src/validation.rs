//! Input validation for scheduling runs.
//!
//! Checks the referential integrity of events against a roster before
//! scheduling. Detects:
//! - Duplicate event names
//! - Events referencing unknown groups or locations
//! - Groups referencing unknown people
//! - Empty groups (their events can never be placed)
//! - Durations that are non-positive or misaligned with the chunk size
//!
//! The scheduler itself fails fast on the same conditions; this module is
//! the batch pre-flight that reports every issue at once.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{EventRequest, Roster};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Tolerance for the duration/chunk divisibility check, matching the
/// algebra's own check.
const DIVISIBILITY_TOLERANCE: f64 = 0.01;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two events share the same name.
    DuplicateEventName,
    /// An event references a group that doesn't exist.
    UnknownGroup,
    /// An event references a location that doesn't exist.
    UnknownLocation,
    /// A group member references a person that doesn't exist.
    UnknownPerson,
    /// An event's group has no members.
    EmptyGroup,
    /// An event's duration is zero or negative.
    NonPositiveDuration,
    /// An event's duration is not an even multiple of the chunk size.
    IndivisibleDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates events against the roster and chunk size.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    events: &[EventRequest],
    roster: &Roster,
    chunk_size: f64,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut event_names = HashSet::new();
    for event in events {
        if !event_names.insert(event.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEventName,
                format!("Duplicate event name: {}", event.name),
            ));
        }

        match roster.group(&event.group) {
            Err(_) => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGroup,
                format!("Event '{}' references unknown group '{}'", event.name, event.group),
            )),
            Ok(group) => {
                if group.is_empty() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EmptyGroup,
                        format!(
                            "Event '{}' uses group '{}', which has no members",
                            event.name, event.group
                        ),
                    ));
                }
                for member in group.members() {
                    if !roster.has_person(member) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::UnknownPerson,
                            format!(
                                "Group '{}' references unknown person '{}'",
                                event.group, member
                            ),
                        ));
                    }
                }
            }
        }

        if !roster.has_location(&event.location) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLocation,
                format!(
                    "Event '{}' references unknown location '{}'",
                    event.name, event.location
                ),
            ));
        }

        if event.duration <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Event '{}' has non-positive duration {}", event.name, event.duration),
            ));
        } else if (event.duration % chunk_size).abs() > DIVISIBILITY_TOLERANCE {
            errors.push(ValidationError::new(
                ValidationErrorKind::IndivisibleDuration,
                format!(
                    "Event '{}' has duration {} not divisible by chunk size {}",
                    event.name, event.duration, chunk_size
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
