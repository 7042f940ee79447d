//! MySQL TeacherDao implementation.

use super::MySqlDao;
use crate::dao::TeacherDao;
use crate::record::Record;
use async_trait::async_trait;
use school_core::{SchoolResult, Teacher, TeacherId};
use tracing::debug;

/// MySQL teacher DAO.
pub type MySqlTeacherDao = MySqlDao<Teacher>;

#[async_trait]
impl TeacherDao for MySqlDao<Teacher> {
    async fn find_by_emp_id(&self, emp_id: &str) -> SchoolResult<Option<Teacher>> {
        debug!("Finding teacher by employee id: {}", emp_id);

        let sql = format!("{} WHERE emp_id = ?", Teacher::select_sql());
        self.fetch_optional(sqlx::query(&sql).bind(emp_id)).await
    }

    async fn update_address(&self, emp_id: &str, address: &str) -> SchoolResult<u64> {
        debug!("Updating address of teacher {}", emp_id);

        self.execute(
            sqlx::query("UPDATE teachers SET address = ? WHERE emp_id = ?")
                .bind(address)
                .bind(emp_id),
        )
        .await
    }

    async fn increment_salary(&self, id: TeacherId, amount: f32) -> SchoolResult<u64> {
        debug!("Incrementing salary of teacher {} by {}", id, amount);

        self.execute(
            sqlx::query("UPDATE teachers SET salary = salary + ? WHERE id = ?")
                .bind(amount)
                .bind(id.into_inner()),
        )
        .await
    }

    async fn find_highest_paid(&self) -> SchoolResult<Option<Teacher>> {
        debug!("Finding highest paid teacher");

        // No secondary sort key: ties resolve in whatever order MySQL returns.
        let sql = format!("{} ORDER BY salary DESC LIMIT 1", Teacher::select_sql());
        self.fetch_optional(sqlx::query(&sql)).await
    }
}
