//! Student entity.

use crate::{Entity, StudentId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A student row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Surrogate key; `None` until storage assigns one.
    pub id: Option<StudentId>,

    /// Unique roll number (business key).
    pub roll_number: String,

    /// Full name.
    pub name: String,

    /// Date of birth.
    pub dob: NaiveDate,

    /// Postal address.
    pub address: String,

    /// Cumulative grade point average on a 0.0-4.0 scale (not enforced).
    pub cgpa: f32,
}

impl Student {
    /// Creates a student without a surrogate id.
    #[must_use]
    pub fn new(
        roll_number: impl Into<String>,
        name: impl Into<String>,
        dob: NaiveDate,
        address: impl Into<String>,
        cgpa: f32,
    ) -> Self {
        Self {
            id: None,
            roll_number: roll_number.into(),
            name: name.into(),
            dob,
            address: address.into(),
            cgpa,
        }
    }
}

impl Entity for Student {
    type Id = StudentId;

    const NAME: &'static str = "Student";

    fn id(&self) -> Option<StudentId> {
        self.id
    }

    fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student[{}] {} ({}), cgpa {:.2}",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.name,
            self.roll_number,
            self.cgpa
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    #[test]
    fn test_new_student_has_no_id() {
        let student = Student::new("R401", "Alice", dob(), "Addr", 3.5);
        assert!(student.id().is_none());
        assert_eq!(student.roll_number, "R401");
        assert_eq!(student.cgpa, 3.5);
    }

    #[test]
    fn test_with_id() {
        let student = Student::new("R401", "Alice", dob(), "Addr", 3.5).with_id(StudentId::new(9));
        assert_eq!(student.id(), Some(StudentId::new(9)));
    }

    #[test]
    fn test_display() {
        let student = Student::new("R401", "Alice", dob(), "Addr", 3.5).with_id(StudentId::new(9));
        assert_eq!(student.to_string(), "Student[9] Alice (R401), cgpa 3.50");
    }
}
