//! Book entity.

use crate::{BookId, Entity, LibraryId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Surrogate key; `None` until storage assigns one.
    pub id: Option<BookId>,

    /// Book code. A business key by convention only: the schema does not
    /// make it unique.
    pub code: String,

    /// Title.
    pub title: String,

    /// Author.
    pub author: String,

    /// Owning library; must reference an existing library.
    pub library_id: LibraryId,
}

impl Book {
    /// Creates a book without a surrogate id.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        library_id: LibraryId,
    ) -> Self {
        Self {
            id: None,
            code: code.into(),
            title: title.into(),
            author: author.into(),
            library_id,
        }
    }
}

impl Entity for Book {
    type Id = BookId;

    const NAME: &'static str = "Book";

    fn id(&self) -> Option<BookId> {
        self.id
    }

    fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book[{}] {} \"{}\" by {} (library {})",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.code,
            self.title,
            self.author,
            self.library_id
        )
    }
}
