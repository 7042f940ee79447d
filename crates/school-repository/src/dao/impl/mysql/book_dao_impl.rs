//! MySQL BookDao implementation.

use super::MySqlDao;
use crate::dao::BookDao;
use crate::record::Record;
use async_trait::async_trait;
use school_core::{Book, BookId, CourseId, SchoolResult};
use tracing::debug;

/// MySQL book DAO.
pub type MySqlBookDao = MySqlDao<Book>;

#[async_trait]
impl BookDao for MySqlDao<Book> {
    async fn find_by_code(&self, code: &str) -> SchoolResult<Vec<Book>> {
        debug!("Finding books by code: {}", code);

        let sql = format!("{} WHERE book_id = ? ORDER BY id", Book::select_sql());
        self.fetch_all(sqlx::query(&sql).bind(code)).await
    }

    async fn update(&self, code: &str, title: &str, author: &str) -> SchoolResult<u64> {
        debug!("Updating books with code {}", code);

        self.execute(
            sqlx::query("UPDATE books SET title = ?, author = ? WHERE book_id = ?")
                .bind(title)
                .bind(author)
                .bind(code),
        )
        .await
    }

    async fn mark_with_course(&self, id: BookId, course_id: CourseId) -> SchoolResult<()> {
        debug!("Marking book {} with course {}", id, course_id);

        self.execute(
            sqlx::query("INSERT INTO course_books (course_id, book_id) VALUES (?, ?)")
                .bind(course_id.into_inner())
                .bind(id.into_inner()),
        )
        .await?;
        Ok(())
    }

    async fn unmark_with_course(&self, id: BookId, course_id: CourseId) -> SchoolResult<u64> {
        debug!("Unmarking book {} from course {}", id, course_id);

        self.execute(
            sqlx::query("DELETE FROM course_books WHERE course_id = ? AND book_id = ?")
                .bind(course_id.into_inner())
                .bind(id.into_inner()),
        )
        .await
    }

    async fn find_for_course(&self, course_id: CourseId) -> SchoolResult<Vec<Book>> {
        debug!("Finding books for course {}", course_id);

        let sql = format!(
            r#"
            SELECT DISTINCT {}
            FROM books b
            JOIN course_books cb ON cb.book_id = b.id
            WHERE cb.course_id = ?
            ORDER BY b.id
            "#,
            Book::select_list(Some("b"))
        );
        self.fetch_all(sqlx::query(&sql).bind(course_id.into_inner()))
            .await
    }
}
