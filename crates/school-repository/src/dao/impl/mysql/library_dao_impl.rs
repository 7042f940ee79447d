//! MySQL LibraryDao implementation.

use super::MySqlDao;
use crate::dao::LibraryDao;
use async_trait::async_trait;
use school_core::{Library, LibraryId, SchoolResult};
use tracing::debug;

/// MySQL library DAO.
pub type MySqlLibraryDao = MySqlDao<Library>;

#[async_trait]
impl LibraryDao for MySqlDao<Library> {
    async fn update_name(&self, id: LibraryId, name: &str) -> SchoolResult<u64> {
        debug!("Renaming library {} to {}", id, name);

        self.execute(
            sqlx::query("UPDATE libraries SET name = ? WHERE id = ?")
                .bind(name)
                .bind(id.into_inner()),
        )
        .await
    }
}
