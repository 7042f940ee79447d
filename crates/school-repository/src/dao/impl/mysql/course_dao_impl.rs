//! MySQL CourseDao implementation.

use super::MySqlDao;
use crate::dao::CourseDao;
use crate::record::Record;
use async_trait::async_trait;
use school_core::{Course, SchoolResult};
use tracing::debug;

/// MySQL course DAO.
pub type MySqlCourseDao = MySqlDao<Course>;

#[async_trait]
impl CourseDao for MySqlDao<Course> {
    async fn find_by_code(&self, code: &str) -> SchoolResult<Option<Course>> {
        debug!("Finding course by code: {}", code);

        let sql = format!("{} WHERE course_code = ?", Course::select_sql());
        self.fetch_optional(sqlx::query(&sql).bind(code)).await
    }

    async fn update(&self, code: &str, name: &str, description: &str) -> SchoolResult<u64> {
        debug!("Updating course {}", code);

        self.execute(
            sqlx::query(
                "UPDATE courses SET course_name = ?, course_description = ? WHERE course_code = ?",
            )
            .bind(name)
            .bind(description)
            .bind(code),
        )
        .await
    }
}
