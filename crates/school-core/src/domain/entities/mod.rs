//! Entity records.
//!
//! Plain value snapshots of one row each. They hold no handle to storage
//! and are never loaded together with their associations.

mod book;
mod course;
mod library;
mod student;
mod teacher;

pub use book::Book;
pub use course::Course;
pub use library::Library;
pub use student::Student;
pub use teacher::Teacher;
