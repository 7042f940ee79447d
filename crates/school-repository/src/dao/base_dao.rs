//! Generic DAO contract shared by every entity.

use crate::record::Record;
use async_trait::async_trait;
use school_core::{Interface, SchoolResult};
use sqlx::mysql::MySqlRow;

/// Create/read/delete/list over one table, plus row mapping.
///
/// Storage errors always propagate. A missing row is never an error:
/// [`read`](Self::read) returns `None`, [`delete`](Self::delete) returns
/// zero affected rows and list operations return an empty `Vec`.
#[async_trait]
pub trait Dao<T: Record>: Interface + Send + Sync {
    /// Inserts one row and returns its surrogate id.
    ///
    /// A supplied id is inserted as-is; otherwise storage assigns one.
    /// Unique and foreign-key violations surface as
    /// [`SchoolError::Conflict`](school_core::SchoolError::Conflict) and
    /// [`SchoolError::ForeignKey`](school_core::SchoolError::ForeignKey).
    async fn create(&self, entity: &T) -> SchoolResult<T::Id>;

    /// Looks a row up by surrogate id.
    async fn read(&self, id: T::Id) -> SchoolResult<Option<T>>;

    /// Hard-deletes by surrogate id. Returns the affected row count.
    async fn delete(&self, id: T::Id) -> SchoolResult<u64>;

    /// Returns every row.
    async fn find_all(&self) -> SchoolResult<Vec<T>>;

    /// Maps a single row, wherever it came from.
    fn map_row(&self, row: &MySqlRow) -> SchoolResult<T> {
        Ok(T::from_row(row)?)
    }

    /// Maps rows in order. An empty slice yields an empty `Vec`.
    fn map_rows(&self, rows: &[MySqlRow]) -> SchoolResult<Vec<T>> {
        rows.iter().map(|row| self.map_row(row)).collect()
    }
}
