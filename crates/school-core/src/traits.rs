//! Core traits shared by entity records and the layers above them.

use std::fmt::{Debug, Display};

/// An entity record identified by a storage-assigned surrogate key.
///
/// A record built by a caller carries no id until storage assigns one;
/// a record read back from storage always carries its id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Typed surrogate key.
    type Id: Copy + Debug + Display + Send + Sync + From<i32> + Into<i32> + 'static;

    /// Human-readable entity name used in logs and errors.
    const NAME: &'static str;

    /// Returns the surrogate id, if one has been supplied or assigned.
    fn id(&self) -> Option<Self::Id>;

    /// Returns the same record carrying the given surrogate id.
    #[must_use]
    fn with_id(self, id: Self::Id) -> Self;
}

/// Marker trait for service layer components.
pub trait Service: Send + Sync {}
