//! Generic MySQL DAO.

use crate::dao::Dao;
use crate::record::{MySqlQuery, Record};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use school_core::{SchoolError, SchoolResult};
use sqlx::mysql::MySqlPool;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// MySQL implementation of [`Dao`] for any [`Record`].
///
/// Holds the injected storage handle and nothing else; it never opens or
/// closes connections on its own.
pub struct MySqlDao<T> {
    pool: Arc<dyn DatabasePoolInterface>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MySqlDao<T> {
    /// Creates a DAO over the shared storage handle.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &MySqlPool {
        self.pool.inner()
    }

    /// Runs a query expected to yield at most one `T`.
    pub(crate) async fn fetch_optional(&self, query: MySqlQuery<'_>) -> SchoolResult<Option<T>> {
        let row = query.fetch_optional(self.pool()).await?;
        row.as_ref().map(|row| self.map_row(row)).transpose()
    }

    /// Runs a query and maps every row to `T`.
    pub(crate) async fn fetch_all(&self, query: MySqlQuery<'_>) -> SchoolResult<Vec<T>> {
        let rows = query.fetch_all(self.pool()).await?;
        self.map_rows(&rows)
    }

    /// Runs a query and maps every row to another record type.
    pub(crate) async fn fetch_all_as<R: Record>(
        &self,
        query: MySqlQuery<'_>,
    ) -> SchoolResult<Vec<R>> {
        let rows = query.fetch_all(self.pool()).await?;
        Ok(rows.iter().map(R::from_row).collect::<Result<Vec<_>, _>>()?)
    }

    /// Runs a statement and returns the affected row count.
    pub(crate) async fn execute(&self, query: MySqlQuery<'_>) -> SchoolResult<u64> {
        let result = query.execute(self.pool()).await?;
        Ok(result.rows_affected())
    }
}

/// Surrogate key to insert explicitly, if any.
///
/// AUTO_INCREMENT treats a zero key as "assign one", so only positive ids
/// are inserted as-is.
fn supplied_key<T: Record>(entity: &T) -> Option<i32> {
    entity
        .id()
        .map(Into::<i32>::into)
        .filter(|raw| *raw > 0)
}

#[async_trait]
impl<T: Record> Dao<T> for MySqlDao<T> {
    async fn create(&self, entity: &T) -> SchoolResult<T::Id> {
        let supplied = supplied_key(entity);
        debug!(table = T::TABLE, id = ?supplied, "Creating {}", T::NAME);

        let sql = T::insert_sql(supplied.is_some());
        let mut query = sqlx::query(&sql);
        if let Some(raw) = supplied {
            query = query.bind(raw);
        }

        let result = entity.bind_columns(query).execute(self.pool()).await?;

        if let Some(raw) = supplied {
            return Ok(T::Id::from(raw));
        }

        let generated = result.last_insert_id();
        let raw = i32::try_from(generated).map_err(|_| {
            SchoolError::internal(format!(
                "Generated id {} out of range for {}",
                generated,
                T::TABLE
            ))
        })?;
        Ok(T::Id::from(raw))
    }

    async fn read(&self, id: T::Id) -> SchoolResult<Option<T>> {
        debug!(table = T::TABLE, %id, "Reading {}", T::NAME);

        let sql = format!("{} WHERE {} = ?", T::select_sql(), T::ID_COLUMN);
        let raw: i32 = id.into();
        self.fetch_optional(sqlx::query(&sql).bind(raw)).await
    }

    async fn delete(&self, id: T::Id) -> SchoolResult<u64> {
        debug!(table = T::TABLE, %id, "Deleting {}", T::NAME);

        let sql = format!("DELETE FROM {} WHERE {} = ?", T::TABLE, T::ID_COLUMN);
        let raw: i32 = id.into();
        self.execute(sqlx::query(&sql).bind(raw)).await
    }

    async fn find_all(&self) -> SchoolResult<Vec<T>> {
        debug!(table = T::TABLE, "Listing all {} rows", T::NAME);

        let sql = T::select_sql();
        self.fetch_all(sqlx::query(&sql)).await
    }
}

impl<T> Clone for MySqlDao<T> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            _record: PhantomData,
        }
    }
}

impl<T: Record> std::fmt::Debug for MySqlDao<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlDao")
            .field("table", &T::TABLE)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_core::{Entity, Library, LibraryId};

    #[test]
    fn test_positive_supplied_id_is_inserted() {
        let library = Library::new("Main").with_id(LibraryId::new(10));
        assert_eq!(supplied_key(&library), Some(10));
    }

    #[test]
    fn test_missing_or_non_positive_id_is_assigned_by_storage() {
        assert_eq!(supplied_key(&Library::new("Main")), None);
        assert_eq!(supplied_key(&Library::new("Main").with_id(LibraryId::new(0))), None);
        assert_eq!(supplied_key(&Library::new("Main").with_id(LibraryId::new(-3))), None);
    }
}
