//! Table mapping for entity records.
//!
//! [`Record`] is the single place where an entity meets SQL: its table,
//! its columns, how a row becomes the entity and how the entity's fields
//! bind into an `INSERT`. The generic DAO builds every shared statement
//! from these pieces.

use school_core::Entity;
use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use sqlx::query::Query;

/// An `INSERT`/`SELECT` statement under construction.
pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// An entity stored in one MySQL table.
pub trait Record: Entity + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Surrogate key column.
    const ID_COLUMN: &'static str;

    /// Data columns in insert order, excluding the surrogate key.
    const COLUMNS: &'static [&'static str];

    /// Maps one row to the entity. Pure: reads columns by name only.
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error>;

    /// Binds the data columns, in [`Self::COLUMNS`] order.
    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;

    /// `id, col1, col2, …` qualified with `alias` when given.
    #[must_use]
    fn select_list(alias: Option<&str>) -> String {
        std::iter::once(Self::ID_COLUMN)
            .chain(Self::COLUMNS.iter().copied())
            .map(|column| match alias {
                Some(alias) => format!("{}.{}", alias, column),
                None => column.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `SELECT <all columns> FROM <table>`.
    #[must_use]
    fn select_sql() -> String {
        format!("SELECT {} FROM {}", Self::select_list(None), Self::TABLE)
    }

    /// `INSERT` statement, with the surrogate key column first when
    /// `with_id` is set.
    #[must_use]
    fn insert_sql(with_id: bool) -> String {
        let columns: Vec<&str> = if with_id {
            std::iter::once(Self::ID_COLUMN)
                .chain(Self::COLUMNS.iter().copied())
                .collect()
        } else {
            Self::COLUMNS.to_vec()
        };
        let placeholders = vec!["?"; columns.len()].join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            Self::TABLE,
            columns.join(", "),
            placeholders
        )
    }
}
