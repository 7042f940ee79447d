//! CourseDao trait.

use super::Dao;
use async_trait::async_trait;
use school_core::{Course, SchoolResult};

/// Course data access.
#[async_trait]
pub trait CourseDao: Dao<Course> {
    /// Finds a course by course code.
    async fn find_by_code(&self, code: &str) -> SchoolResult<Option<Course>>;

    /// Sets name and description of the course with this code.
    /// Returns the affected row count.
    async fn update(&self, code: &str, name: &str, description: &str) -> SchoolResult<u64>;
}
