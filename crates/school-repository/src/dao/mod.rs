//! DAO (Data Access Object) layer.
//!
//! [`Dao`] is the contract every entity shares: create, read, delete,
//! list and row mapping. Each entity then has its own trait adding the
//! queries only it needs (targeted updates, extremal lookups, association
//! maintenance and traversal).
//!
//! ```text
//! SchoolService → StudentDao / TeacherDao / … (traits) → MySqlDao<T> → MySQL
//! ```

pub mod base_dao;
pub mod book_dao;
pub mod course_dao;
pub mod library_dao;
pub mod student_dao;
pub mod teacher_dao;
pub mod r#impl;

pub use base_dao::Dao;
pub use book_dao::BookDao;
pub use course_dao::CourseDao;
pub use library_dao::LibraryDao;
pub use student_dao::StudentDao;
pub use teacher_dao::TeacherDao;
pub use r#impl::*;
