//! BookDao trait.

use super::Dao;
use async_trait::async_trait;
use school_core::{Book, BookId, CourseId, SchoolResult};

/// Book data access, including the course-book association.
#[async_trait]
pub trait BookDao: Dao<Book> {
    /// Finds books by book code. Codes are not unique, so this may return
    /// several rows.
    async fn find_by_code(&self, code: &str) -> SchoolResult<Vec<Book>>;

    /// Sets title and author of every book with this code.
    /// Returns the affected row count.
    async fn update(&self, code: &str, title: &str, author: &str) -> SchoolResult<u64>;

    /// Associates a book with a course.
    async fn mark_with_course(&self, id: BookId, course_id: CourseId) -> SchoolResult<()>;

    /// Removes a book-course association. Returns the rows removed.
    async fn unmark_with_course(&self, id: BookId, course_id: CourseId) -> SchoolResult<u64>;

    /// Books associated with a course.
    async fn find_for_course(&self, course_id: CourseId) -> SchoolResult<Vec<Book>>;
}
