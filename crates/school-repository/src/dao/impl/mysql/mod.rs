//! MySQL DAO implementations.
//!
//! One generic [`MySqlDao`] carries the shared create/read/delete/list
//! logic for every [`Record`](crate::Record); each entity module adds its
//! specific trait on top of the matching instantiation.

mod book_dao_impl;
mod course_dao_impl;
mod library_dao_impl;
mod mysql_dao;
mod records;
mod student_dao_impl;
mod teacher_dao_impl;

pub use book_dao_impl::MySqlBookDao;
pub use course_dao_impl::MySqlCourseDao;
pub use library_dao_impl::MySqlLibraryDao;
pub use mysql_dao::MySqlDao;
pub use student_dao_impl::MySqlStudentDao;
pub use teacher_dao_impl::MySqlTeacherDao;
