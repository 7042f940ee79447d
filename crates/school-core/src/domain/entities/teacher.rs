//! Teacher entity.

use crate::{Entity, TeacherId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A teacher row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Surrogate key; `None` until storage assigns one.
    pub id: Option<TeacherId>,

    /// Unique employee id (business key).
    pub emp_id: String,

    /// Full name.
    pub name: String,

    /// Date of birth.
    pub dob: NaiveDate,

    /// Postal address.
    pub address: String,

    /// Salary.
    pub salary: f32,
}

impl Teacher {
    /// Creates a teacher without a surrogate id.
    #[must_use]
    pub fn new(
        emp_id: impl Into<String>,
        name: impl Into<String>,
        dob: NaiveDate,
        address: impl Into<String>,
        salary: f32,
    ) -> Self {
        Self {
            id: None,
            emp_id: emp_id.into(),
            name: name.into(),
            dob,
            address: address.into(),
            salary,
        }
    }
}

impl Entity for Teacher {
    type Id = TeacherId;

    const NAME: &'static str = "Teacher";

    fn id(&self) -> Option<TeacherId> {
        self.id
    }

    fn with_id(mut self, id: TeacherId) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Teacher[{}] {} ({}), salary {:.2}",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.name,
            self.emp_id,
            self.salary
        )
    }
}
