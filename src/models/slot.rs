//! Time slot model.
//!
//! A time slot is one schedulable period in the weekly grid, e.g.
//! Monday 08:00-08:45. Times are zero-padded `"HH:MM"` strings so that
//! lexicographic order coincides with chronological order within a day.

use serde::{Deserialize, Serialize};

use super::Day;

/// A schedulable time period on a specific day.
///
/// Slots are plain immutable values; the codec establishes their canonical
/// order (day ascending, then start time ascending). `Ord` is deliberately
/// not derived — the end time plays no role in ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week.
    pub day: Day,
    /// Start time, zero-padded `"HH:MM"`.
    pub start: String,
    /// End time, zero-padded `"HH:MM"`.
    pub end: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: Day, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: start.into(),
            end: end.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_fields() {
        let slot = TimeSlot::new(Day::Monday, "08:00", "08:45");
        assert_eq!(slot.day, Day::Monday);
        assert_eq!(slot.start, "08:00");
        assert_eq!(slot.end, "08:45");
    }

    #[test]
    fn test_zero_padded_times_order_lexicographically() {
        // "09:00" < "10:00" holds for string comparison only because times
        // are zero-padded.
        assert!("09:00" < "10:00");
        assert!("08:45" < "09:30");
    }

    #[test]
    fn test_slot_serde_roundtrip() {
        let slot = TimeSlot::new(Day::Friday, "13:15", "14:00");
        let json = serde_json::to_string(&slot).unwrap();
        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }
}
