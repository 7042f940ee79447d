//! Library entity.

use crate::{Entity, LibraryId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A library row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Surrogate key; `None` until storage assigns one.
    pub id: Option<LibraryId>,

    /// Library name.
    pub name: String,
}

impl Library {
    /// Creates a library without a surrogate id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Library {
    type Id = LibraryId;

    const NAME: &'static str = "Library";

    fn id(&self) -> Option<LibraryId> {
        self.id
    }

    fn with_id(mut self, id: LibraryId) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Library[{}] {}",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.name
        )
    }
}
