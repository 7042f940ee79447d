//! Typed surrogate id wrappers for domain entities.
//!
//! Every table uses a storage-assigned `INT` primary key. Wrapping it per
//! entity keeps a `BookId` from being passed where a `CourseId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Wraps a raw surrogate key.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw surrogate key.
            #[must_use]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

surrogate_id!(
    /// Surrogate key of a row in `students`.
    StudentId
);
surrogate_id!(
    /// Surrogate key of a row in `teachers`.
    TeacherId
);
surrogate_id!(
    /// Surrogate key of a row in `courses`.
    CourseId
);
surrogate_id!(
    /// Surrogate key of a row in `books`.
    BookId
);
surrogate_id!(
    /// Surrogate key of a row in `libraries`.
    LibraryId
);
