//! StudentDao trait.

use super::Dao;
use async_trait::async_trait;
use school_core::{Book, CourseId, SchoolResult, Student, StudentId};

/// Student data access.
#[async_trait]
pub trait StudentDao: Dao<Student> {
    /// Finds a student by roll number.
    async fn find_by_roll_number(&self, roll_number: &str) -> SchoolResult<Option<Student>>;

    /// Sets the address of the student with this roll number.
    /// Returns the affected row count (0 when the roll number is unknown).
    async fn update_address(&self, roll_number: &str, address: &str) -> SchoolResult<u64>;

    /// Sets a student's CGPA. Returns the affected row count.
    async fn update_cgpa(&self, id: StudentId, cgpa: f32) -> SchoolResult<u64>;

    /// Returns the student with the highest CGPA, `None` when there are no
    /// students. Among equal CGPAs the row returned is unspecified.
    async fn find_topper(&self) -> SchoolResult<Option<Student>>;

    /// Enrolls a student in a course. Duplicate enrollments are not rejected.
    async fn add_to_course(&self, id: StudentId, course_id: CourseId) -> SchoolResult<()>;

    /// Removes an enrollment. Returns the number of enrollment rows removed.
    async fn remove_from_course(&self, id: StudentId, course_id: CourseId) -> SchoolResult<u64>;

    /// Books associated with any course the student is enrolled in.
    async fn find_books(&self, id: StudentId) -> SchoolResult<Vec<Book>>;
}
