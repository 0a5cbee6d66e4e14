//! Input validation for timetabling problems.
//!
//! Checks structural integrity of slots and offerings before a run.
//! Detects:
//! - Duplicate offering keys
//! - Offerings requiring zero hours
//! - Malformed or inverted slot time ranges
//! - Duplicate time slots
//!
//! Validation is a pre-flight check for callers; the executor itself
//! accepts degenerate inputs and runs them to a well-defined result.

use std::collections::HashSet;

use crate::models::{Offering, TimeSlot};

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
    /// Two offerings share the same key.
    DuplicateKey,
    /// An offering requires zero hours.
    ZeroRequiredHours,
    /// A slot time is not a zero-padded `"HH:MM"` string.
    MalformedTime,
    /// A slot ends at or before its start.
    InvalidTimeRange,
    /// The same (day, start, end) slot appears twice.
    DuplicateSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling run.
///
/// Checks:
/// 1. No duplicate offering keys
/// 2. Every offering requires at least one hour
/// 3. All slot times are well-formed `"HH:MM"` strings
/// 4. Every slot starts before it ends
/// 5. No duplicate slots
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(slots: &[TimeSlot], offerings: &[Offering]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut offering_keys = HashSet::new();
    for offering in offerings {
        if !offering_keys.insert(offering.key.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateKey,
                format!("Duplicate offering key: {}", offering.key),
            ));
        }

        if offering.required_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroRequiredHours,
                format!("Offering '{}' requires zero hours", offering.key),
            ));
        }
    }

    let mut seen_slots = HashSet::new();
    for slot in slots {
        let mut well_formed = true;
        for time in [slot.start.as_str(), slot.end.as_str()] {
            if !is_hhmm(time) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedTime,
                    format!("Slot time '{time}' is not a zero-padded HH:MM string"),
                ));
                well_formed = false;
            }
        }

        // Lexicographic comparison is only meaningful for well-formed times.
        if well_formed && slot.start >= slot.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Slot {:?} {}-{} ends at or before its start",
                    slot.day, slot.start, slot.end
                ),
            ));
        }

        if !seen_slots.insert((slot.day, slot.start.as_str(), slot.end.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("Duplicate slot: {:?} {}-{}", slot.day, slot.start, slot.end),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_hhmm(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    if ![bytes[0], bytes[1], bytes[3], bytes[4]]
        .iter()
        .all(|b| b.is_ascii_digit())
    {
        return false;
    }

    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours < 24 && minutes < 60
}
