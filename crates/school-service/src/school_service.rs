//! School service trait definition.

use async_trait::async_trait;
use school_core::{
    Book, BookId, Course, CourseId, Interface, Library, LibraryId, SchoolResult, Student,
    StudentId, Teacher, TeacherId,
};

/// School management use cases.
///
/// Lookups return `None` or an empty `Vec` when nothing matches. Mutations
/// keyed by a business key or surrogate id return the affected row count,
/// so zero means "no such row".
#[async_trait]
pub trait SchoolService: Interface + Send + Sync {
    // ---- Students ----

    /// Adds a student and returns its surrogate id.
    async fn add_student(&self, student: &Student) -> SchoolResult<StudentId>;

    /// Gets a student by surrogate id.
    async fn get_student(&self, id: StudentId) -> SchoolResult<Option<Student>>;

    /// Gets a student by roll number.
    async fn get_student_by_roll_number(&self, roll_number: &str) -> SchoolResult<Option<Student>>;

    /// Lists every student.
    async fn get_all_students(&self) -> SchoolResult<Vec<Student>>;

    /// Updates a student's address by roll number.
    async fn update_student_address(&self, roll_number: &str, address: &str) -> SchoolResult<u64>;

    /// Deletes a student.
    async fn delete_student(&self, id: StudentId) -> SchoolResult<u64>;

    /// Sets a student's CGPA.
    async fn update_cgpa(&self, id: StudentId, cgpa: f32) -> SchoolResult<u64>;

    /// Student with the highest CGPA.
    async fn get_topper(&self) -> SchoolResult<Option<Student>>;

    // ---- Teachers ----

    /// Adds a teacher and returns its surrogate id.
    async fn add_teacher(&self, teacher: &Teacher) -> SchoolResult<TeacherId>;

    /// Gets a teacher by surrogate id.
    async fn get_teacher(&self, id: TeacherId) -> SchoolResult<Option<Teacher>>;

    /// Gets a teacher by employee id.
    async fn get_teacher_by_emp_id(&self, emp_id: &str) -> SchoolResult<Option<Teacher>>;

    /// Lists every teacher.
    async fn get_all_teachers(&self) -> SchoolResult<Vec<Teacher>>;

    /// Updates a teacher's address by employee id.
    async fn update_teacher_address(&self, emp_id: &str, address: &str) -> SchoolResult<u64>;

    /// Deletes a teacher.
    async fn delete_teacher(&self, id: TeacherId) -> SchoolResult<u64>;

    /// Raises a teacher's salary by `amount`.
    async fn increment_salary(&self, id: TeacherId, amount: f32) -> SchoolResult<u64>;

    /// Teacher with the highest salary.
    async fn get_highest_paid_teacher(&self) -> SchoolResult<Option<Teacher>>;

    // ---- Courses ----

    /// Adds a course and returns its surrogate id.
    async fn add_course(&self, course: &Course) -> SchoolResult<CourseId>;

    /// Gets a course by surrogate id.
    async fn get_course(&self, id: CourseId) -> SchoolResult<Option<Course>>;

    /// Gets a course by course code.
    async fn get_course_by_code(&self, code: &str) -> SchoolResult<Option<Course>>;

    /// Lists every course.
    async fn get_all_courses(&self) -> SchoolResult<Vec<Course>>;

    /// Updates a course's name and description by course code.
    async fn update_course(&self, code: &str, name: &str, description: &str) -> SchoolResult<u64>;

    /// Deletes a course.
    async fn delete_course(&self, id: CourseId) -> SchoolResult<u64>;

    // ---- Books ----

    /// Adds a book and returns its surrogate id.
    async fn add_book(&self, book: &Book) -> SchoolResult<BookId>;

    /// Gets a book by surrogate id.
    async fn get_book(&self, id: BookId) -> SchoolResult<Option<Book>>;

    /// Gets every book carrying this book code.
    async fn get_books_by_code(&self, code: &str) -> SchoolResult<Vec<Book>>;

    /// Lists every book.
    async fn get_all_books(&self) -> SchoolResult<Vec<Book>>;

    /// Updates title and author of the books with this code.
    async fn update_book(&self, code: &str, title: &str, author: &str) -> SchoolResult<u64>;

    /// Deletes a book.
    async fn delete_book(&self, id: BookId) -> SchoolResult<u64>;

    // ---- Libraries ----

    /// Adds a library and returns its surrogate id.
    async fn add_library(&self, library: &Library) -> SchoolResult<LibraryId>;

    /// Gets a library by surrogate id.
    async fn get_library(&self, id: LibraryId) -> SchoolResult<Option<Library>>;

    /// Lists every library.
    async fn get_all_libraries(&self) -> SchoolResult<Vec<Library>>;

    /// Renames a library.
    async fn update_library(&self, id: LibraryId, name: &str) -> SchoolResult<u64>;

    /// Deletes a library.
    async fn delete_library(&self, id: LibraryId) -> SchoolResult<u64>;

    // ---- Associations ----

    /// Associates a book with a course.
    async fn mark_book_with_course(&self, book_id: BookId, course_id: CourseId) -> SchoolResult<()>;

    /// Removes a book-course association.
    async fn unmark_book_with_course(
        &self,
        book_id: BookId,
        course_id: CourseId,
    ) -> SchoolResult<u64>;

    /// Enrolls a student in a course.
    async fn add_student_to_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> SchoolResult<()>;

    /// Removes an enrollment.
    async fn remove_student_from_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> SchoolResult<u64>;

    /// Books associated with a course.
    async fn get_course_books(&self, course_id: CourseId) -> SchoolResult<Vec<Book>>;

    /// Books for every course the student is enrolled in.
    async fn get_student_books(&self, student_id: StudentId) -> SchoolResult<Vec<Book>>;
}
