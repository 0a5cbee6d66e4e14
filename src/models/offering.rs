//! Course offering model.

use serde::{Deserialize, Serialize};

/// A course offering to be placed on the timetable.
///
/// The key identifies one concrete teaching obligation (typically
/// grade-section-subject, e.g. `"GRADE-10-A-MATH"`); `required_hours` is the
/// number of distinct slot assignments the offering needs per week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offering {
    /// Unique offering identifier.
    pub key: String,
    /// Weekly hours to schedule; each assignment covers one hour.
    pub required_hours: u32,
}

impl Offering {
    /// Creates a new offering.
    pub fn new(key: impl Into<String>, required_hours: u32) -> Self {
        Self {
            key: key.into(),
            required_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offering_fields() {
        let offering = Offering::new("GRADE-10-A-MATH", 4);
        assert_eq!(offering.key, "GRADE-10-A-MATH");
        assert_eq!(offering.required_hours, 4);
    }

    #[test]
    fn test_offering_serde_list() {
        let json = r#"[
            {"key": "GRADE-10-A-MATH", "required_hours": 4},
            {"key": "GRADE-10-A-SCIENCE", "required_hours": 3}
        ]"#;
        let offerings: Vec<Offering> = serde_json::from_str(json).unwrap();
        assert_eq!(offerings.len(), 2);
        assert_eq!(offerings[0].key, "GRADE-10-A-MATH");
        assert_eq!(offerings[1].required_hours, 3);
    }
}
