//! School service implementation.

use crate::di::{build_storage_module, resolve_pool};
use crate::school_service::SchoolService;
use async_trait::async_trait;
use school_config::DatabaseConfig;
use school_core::{
    Book, BookId, Course, CourseId, Library, LibraryId, SchoolResult, Service, Student, StudentId,
    Teacher, TeacherId,
};
use school_repository::{
    BookDao, CourseDao, DatabasePoolInterface, LibraryDao, MySqlBookDao, MySqlCourseDao,
    MySqlLibraryDao, MySqlStudentDao, MySqlTeacherDao, StudentDao, TeacherDao,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Facade over the five DAOs.
///
/// Each method is one DAO call followed by one `info!` line; errors are
/// returned untouched.
pub struct SchoolServiceImpl {
    students: Arc<dyn StudentDao>,
    teachers: Arc<dyn TeacherDao>,
    courses: Arc<dyn CourseDao>,
    books: Arc<dyn BookDao>,
    libraries: Arc<dyn LibraryDao>,
}

impl SchoolServiceImpl {
    /// Creates a service over the given DAOs.
    pub fn new(
        students: Arc<dyn StudentDao>,
        teachers: Arc<dyn TeacherDao>,
        courses: Arc<dyn CourseDao>,
        books: Arc<dyn BookDao>,
        libraries: Arc<dyn LibraryDao>,
    ) -> Self {
        Self {
            students,
            teachers,
            courses,
            books,
            libraries,
        }
    }

    /// Builds the MySQL DAOs over one shared handle.
    pub fn from_pool(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self::new(
            Arc::new(MySqlStudentDao::new(Arc::clone(&pool))),
            Arc::new(MySqlTeacherDao::new(Arc::clone(&pool))),
            Arc::new(MySqlCourseDao::new(Arc::clone(&pool))),
            Arc::new(MySqlBookDao::new(Arc::clone(&pool))),
            Arc::new(MySqlLibraryDao::new(pool)),
        )
    }

    /// Connects, optionally applies migrations and builds the MySQL DAOs.
    pub async fn connect(config: &DatabaseConfig) -> SchoolResult<Self> {
        let module = build_storage_module(config).await?;
        let pool = resolve_pool(module.as_ref());

        if config.run_migrations {
            pool.run_migrations().await?;
        }

        Ok(Self::from_pool(pool))
    }
}

impl Service for SchoolServiceImpl {}

#[async_trait]
impl SchoolService for SchoolServiceImpl {
    async fn add_student(&self, student: &Student) -> SchoolResult<StudentId> {
        debug!("Adding student: {}", student.roll_number);

        let id = self.students.create(student).await?;
        info!("Student added: {}", id);
        Ok(id)
    }

    async fn get_student(&self, id: StudentId) -> SchoolResult<Option<Student>> {
        let student = self.students.read(id).await?;
        info!(found = student.is_some(), "Student lookup: {}", id);
        Ok(student)
    }

    async fn get_student_by_roll_number(&self, roll_number: &str) -> SchoolResult<Option<Student>> {
        let student = self.students.find_by_roll_number(roll_number).await?;
        info!(found = student.is_some(), "Student lookup by roll number: {}", roll_number);
        Ok(student)
    }

    async fn get_all_students(&self) -> SchoolResult<Vec<Student>> {
        let students = self.students.find_all().await?;
        info!("Listed {} students", students.len());
        Ok(students)
    }

    async fn update_student_address(&self, roll_number: &str, address: &str) -> SchoolResult<u64> {
        let affected = self.students.update_address(roll_number, address).await?;
        info!(affected, "Student address updated: {}", roll_number);
        Ok(affected)
    }

    async fn delete_student(&self, id: StudentId) -> SchoolResult<u64> {
        let affected = self.students.delete(id).await?;
        info!(affected, "Student deleted: {}", id);
        Ok(affected)
    }

    async fn update_cgpa(&self, id: StudentId, cgpa: f32) -> SchoolResult<u64> {
        let affected = self.students.update_cgpa(id, cgpa).await?;
        info!(affected, "CGPA updated for student {}: {}", id, cgpa);
        Ok(affected)
    }

    async fn get_topper(&self) -> SchoolResult<Option<Student>> {
        let topper = self.students.find_topper().await?;
        match &topper {
            Some(student) => info!("Topper: {}", student),
            None => info!("No students, no topper"),
        }
        Ok(topper)
    }

    async fn add_teacher(&self, teacher: &Teacher) -> SchoolResult<TeacherId> {
        debug!("Adding teacher: {}", teacher.emp_id);

        let id = self.teachers.create(teacher).await?;
        info!("Teacher added: {}", id);
        Ok(id)
    }

    async fn get_teacher(&self, id: TeacherId) -> SchoolResult<Option<Teacher>> {
        let teacher = self.teachers.read(id).await?;
        info!(found = teacher.is_some(), "Teacher lookup: {}", id);
        Ok(teacher)
    }

    async fn get_teacher_by_emp_id(&self, emp_id: &str) -> SchoolResult<Option<Teacher>> {
        let teacher = self.teachers.find_by_emp_id(emp_id).await?;
        info!(found = teacher.is_some(), "Teacher lookup by employee id: {}", emp_id);
        Ok(teacher)
    }

    async fn get_all_teachers(&self) -> SchoolResult<Vec<Teacher>> {
        let teachers = self.teachers.find_all().await?;
        info!("Listed {} teachers", teachers.len());
        Ok(teachers)
    }

    async fn update_teacher_address(&self, emp_id: &str, address: &str) -> SchoolResult<u64> {
        let affected = self.teachers.update_address(emp_id, address).await?;
        info!(affected, "Teacher address updated: {}", emp_id);
        Ok(affected)
    }

    async fn delete_teacher(&self, id: TeacherId) -> SchoolResult<u64> {
        let affected = self.teachers.delete(id).await?;
        info!(affected, "Teacher deleted: {}", id);
        Ok(affected)
    }

    async fn increment_salary(&self, id: TeacherId, amount: f32) -> SchoolResult<u64> {
        let affected = self.teachers.increment_salary(id, amount).await?;
        info!(affected, "Salary of teacher {} incremented by {}", id, amount);
        Ok(affected)
    }

    async fn get_highest_paid_teacher(&self) -> SchoolResult<Option<Teacher>> {
        let teacher = self.teachers.find_highest_paid().await?;
        match &teacher {
            Some(teacher) => info!("Highest paid teacher: {}", teacher),
            None => info!("No teachers, no highest paid"),
        }
        Ok(teacher)
    }

    async fn add_course(&self, course: &Course) -> SchoolResult<CourseId> {
        debug!("Adding course: {}", course.code);

        let id = self.courses.create(course).await?;
        info!("Course added: {}", id);
        Ok(id)
    }

    async fn get_course(&self, id: CourseId) -> SchoolResult<Option<Course>> {
        let course = self.courses.read(id).await?;
        info!(found = course.is_some(), "Course lookup: {}", id);
        Ok(course)
    }

    async fn get_course_by_code(&self, code: &str) -> SchoolResult<Option<Course>> {
        let course = self.courses.find_by_code(code).await?;
        info!(found = course.is_some(), "Course lookup by code: {}", code);
        Ok(course)
    }

    async fn get_all_courses(&self) -> SchoolResult<Vec<Course>> {
        let courses = self.courses.find_all().await?;
        info!("Listed {} courses", courses.len());
        Ok(courses)
    }

    async fn update_course(&self, code: &str, name: &str, description: &str) -> SchoolResult<u64> {
        let affected = self.courses.update(code, name, description).await?;
        info!(affected, "Course updated: {}", code);
        Ok(affected)
    }

    async fn delete_course(&self, id: CourseId) -> SchoolResult<u64> {
        let affected = self.courses.delete(id).await?;
        info!(affected, "Course deleted: {}", id);
        Ok(affected)
    }

    async fn add_book(&self, book: &Book) -> SchoolResult<BookId> {
        debug!("Adding book: {}", book.code);

        let id = self.books.create(book).await?;
        info!("Book added: {}", id);
        Ok(id)
    }

    async fn get_book(&self, id: BookId) -> SchoolResult<Option<Book>> {
        let book = self.books.read(id).await?;
        info!(found = book.is_some(), "Book lookup: {}", id);
        Ok(book)
    }

    async fn get_books_by_code(&self, code: &str) -> SchoolResult<Vec<Book>> {
        let books = self.books.find_by_code(code).await?;
        info!("Found {} books with code {}", books.len(), code);
        Ok(books)
    }

    async fn get_all_books(&self) -> SchoolResult<Vec<Book>> {
        let books = self.books.find_all().await?;
        info!("Listed {} books", books.len());
        Ok(books)
    }

    async fn update_book(&self, code: &str, title: &str, author: &str) -> SchoolResult<u64> {
        let affected = self.books.update(code, title, author).await?;
        info!(affected, "Book updated: {}", code);
        Ok(affected)
    }

    async fn delete_book(&self, id: BookId) -> SchoolResult<u64> {
        let affected = self.books.delete(id).await?;
        info!(affected, "Book deleted: {}", id);
        Ok(affected)
    }

    async fn add_library(&self, library: &Library) -> SchoolResult<LibraryId> {
        debug!("Adding library: {}", library.name);

        let id = self.libraries.create(library).await?;
        info!("Library added: {}", id);
        Ok(id)
    }

    async fn get_library(&self, id: LibraryId) -> SchoolResult<Option<Library>> {
        let library = self.libraries.read(id).await?;
        info!(found = library.is_some(), "Library lookup: {}", id);
        Ok(library)
    }

    async fn get_all_libraries(&self) -> SchoolResult<Vec<Library>> {
        let libraries = self.libraries.find_all().await?;
        info!("Listed {} libraries", libraries.len());
        Ok(libraries)
    }

    async fn update_library(&self, id: LibraryId, name: &str) -> SchoolResult<u64> {
        let affected = self.libraries.update_name(id, name).await?;
        info!(affected, "Library renamed: {} -> {}", id, name);
        Ok(affected)
    }

    async fn delete_library(&self, id: LibraryId) -> SchoolResult<u64> {
        let affected = self.libraries.delete(id).await?;
        info!(affected, "Library deleted: {}", id);
        Ok(affected)
    }

    async fn mark_book_with_course(
        &self,
        book_id: BookId,
        course_id: CourseId,
    ) -> SchoolResult<()> {
        self.books.mark_with_course(book_id, course_id).await?;
        info!("Book {} marked with course {}", book_id, course_id);
        Ok(())
    }

    async fn unmark_book_with_course(
        &self,
        book_id: BookId,
        course_id: CourseId,
    ) -> SchoolResult<u64> {
        let affected = self.books.unmark_with_course(book_id, course_id).await?;
        info!(affected, "Book {} unmarked from course {}", book_id, course_id);
        Ok(affected)
    }

    async fn add_student_to_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> SchoolResult<()> {
        self.students.add_to_course(student_id, course_id).await?;
        info!("Student {} enrolled in course {}", student_id, course_id);
        Ok(())
    }

    async fn remove_student_from_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> SchoolResult<u64> {
        let affected = self.students.remove_from_course(student_id, course_id).await?;
        info!(affected, "Student {} removed from course {}", student_id, course_id);
        Ok(affected)
    }

    async fn get_course_books(&self, course_id: CourseId) -> SchoolResult<Vec<Book>> {
        let books = self.books.find_for_course(course_id).await?;
        info!("Course {} has {} books", course_id, books.len());
        Ok(books)
    }

    async fn get_student_books(&self, student_id: StudentId) -> SchoolResult<Vec<Book>> {
        let books = self.students.find_books(student_id).await?;
        info!("Student {} has {} books", student_id, books.len());
        Ok(books)
    }
}

impl std::fmt::Debug for SchoolServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchoolServiceImpl").finish_non_exhaustive()
    }
}
