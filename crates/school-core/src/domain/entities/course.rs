//! Course entity.

use crate::{CourseId, Entity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A course row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Surrogate key; `None` until storage assigns one.
    pub id: Option<CourseId>,

    /// Unique course code (business key).
    pub code: String,

    /// Course name.
    pub name: String,

    /// Free-text description.
    pub description: String,
}

impl Course {
    /// Creates a course without a surrogate id.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Entity for Course {
    type Id = CourseId;

    const NAME: &'static str = "Course";

    fn id(&self) -> Option<CourseId> {
        self.id
    }

    fn with_id(mut self, id: CourseId) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course[{}] {} {}",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.code,
            self.name
        )
    }
}
