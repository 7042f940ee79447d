//! MySQL StudentDao implementation.

use super::MySqlDao;
use crate::dao::StudentDao;
use crate::record::Record;
use async_trait::async_trait;
use school_core::{Book, CourseId, SchoolResult, Student, StudentId};
use tracing::debug;

/// MySQL student DAO.
pub type MySqlStudentDao = MySqlDao<Student>;

#[async_trait]
impl StudentDao for MySqlDao<Student> {
    async fn find_by_roll_number(&self, roll_number: &str) -> SchoolResult<Option<Student>> {
        debug!("Finding student by roll number: {}", roll_number);

        let sql = format!("{} WHERE roll_number = ?", Student::select_sql());
        self.fetch_optional(sqlx::query(&sql).bind(roll_number)).await
    }

    async fn update_address(&self, roll_number: &str, address: &str) -> SchoolResult<u64> {
        debug!("Updating address of student {}", roll_number);

        self.execute(
            sqlx::query("UPDATE students SET address = ? WHERE roll_number = ?")
                .bind(address)
                .bind(roll_number),
        )
        .await
    }

    async fn update_cgpa(&self, id: StudentId, cgpa: f32) -> SchoolResult<u64> {
        debug!("Updating cgpa of student {} to {}", id, cgpa);

        self.execute(
            sqlx::query("UPDATE students SET cgpa = ? WHERE id = ?")
                .bind(cgpa)
                .bind(id.into_inner()),
        )
        .await
    }

    async fn find_topper(&self) -> SchoolResult<Option<Student>> {
        debug!("Finding student with highest cgpa");

        // No secondary sort key: ties resolve in whatever order MySQL returns.
        let sql = format!("{} ORDER BY cgpa DESC LIMIT 1", Student::select_sql());
        self.fetch_optional(sqlx::query(&sql)).await
    }

    async fn add_to_course(&self, id: StudentId, course_id: CourseId) -> SchoolResult<()> {
        debug!("Enrolling student {} in course {}", id, course_id);

        self.execute(
            sqlx::query("INSERT INTO enrollments (course_id, student_id) VALUES (?, ?)")
                .bind(course_id.into_inner())
                .bind(id.into_inner()),
        )
        .await?;
        Ok(())
    }

    async fn remove_from_course(&self, id: StudentId, course_id: CourseId) -> SchoolResult<u64> {
        debug!("Removing student {} from course {}", id, course_id);

        self.execute(
            sqlx::query("DELETE FROM enrollments WHERE course_id = ? AND student_id = ?")
                .bind(course_id.into_inner())
                .bind(id.into_inner()),
        )
        .await
    }

    async fn find_books(&self, id: StudentId) -> SchoolResult<Vec<Book>> {
        debug!("Finding books for student {}", id);

        // Both hops in one statement so enrollments and course books are
        // read from the same snapshot.
        let sql = format!(
            r#"
            SELECT DISTINCT {}
            FROM books b
            JOIN course_books cb ON cb.book_id = b.id
            JOIN enrollments e ON e.course_id = cb.course_id
            WHERE e.student_id = ?
            ORDER BY b.id
            "#,
            Book::select_list(Some("b"))
        );
        self.fetch_all_as::<Book>(sqlx::query(&sql).bind(id.into_inner()))
            .await
    }
}
