//! TeacherDao trait.

use super::Dao;
use async_trait::async_trait;
use school_core::{SchoolResult, Teacher, TeacherId};

/// Teacher data access.
#[async_trait]
pub trait TeacherDao: Dao<Teacher> {
    /// Finds a teacher by employee id.
    async fn find_by_emp_id(&self, emp_id: &str) -> SchoolResult<Option<Teacher>>;

    /// Sets the address of the teacher with this employee id.
    /// Returns the affected row count.
    async fn update_address(&self, emp_id: &str, address: &str) -> SchoolResult<u64>;

    /// Adds `amount` to a teacher's salary. Returns the affected row count.
    async fn increment_salary(&self, id: TeacherId, amount: f32) -> SchoolResult<u64>;

    /// Returns the teacher with the highest salary, `None` when there are
    /// no teachers. Among equal salaries the row returned is unspecified.
    async fn find_highest_paid(&self) -> SchoolResult<Option<Teacher>>;
}
