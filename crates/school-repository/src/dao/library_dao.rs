//! LibraryDao trait.

use super::Dao;
use async_trait::async_trait;
use school_core::{Library, LibraryId, SchoolResult};

/// Library data access.
#[async_trait]
pub trait LibraryDao: Dao<Library> {
    /// Renames a library. Returns the affected row count.
    async fn update_name(&self, id: LibraryId, name: &str) -> SchoolResult<u64>;
}
