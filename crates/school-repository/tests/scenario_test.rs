//! End-to-end scenarios spanning several DAOs.

mod common;

use common::{
    create_test_book, create_test_course, create_test_library, create_test_student, TestDatabase,
};
use school_core::Book;
use school_repository::{
    BookDao, Dao, MySqlBookDao, MySqlCourseDao, MySqlLibraryDao, MySqlStudentDao, StudentDao,
};

#[tokio::test]
async fn test_book_lifecycle() {
    let db = TestDatabase::new().await;
    let libraries = MySqlLibraryDao::new(db.pool());
    let books = MySqlBookDao::new(db.pool());

    let main = libraries.create(&create_test_library("Main")).await.expect("create");
    let id = books
        .create(&Book::new("B10", "Test Title", "Author X", main))
        .await
        .expect("Failed to create book");

    let found = books.read(id).await.expect("Query failed").expect("Book not found");
    assert_eq!(found.title, "Test Title");
    assert_eq!(found.library_id, main);

    assert_eq!(books.delete(id).await.expect("Delete failed"), 1);
    assert!(books.read(id).await.expect("Query failed").is_none());
}

#[tokio::test]
async fn test_topper_between_two_students() {
    let db = TestDatabase::new().await;
    let students = MySqlStudentDao::new(db.pool());

    let best = students.create(&create_test_student("R501", 3.9)).await.expect("create");
    students.create(&create_test_student("R502", 3.2)).await.expect("create");

    let topper = students
        .find_topper()
        .await
        .expect("Query failed")
        .expect("Topper not found");
    assert_eq!(topper.id, Some(best));
    assert_eq!(topper.roll_number, "R501");
}

#[tokio::test]
async fn test_mark_then_unmark_book_with_course() {
    let db = TestDatabase::new().await;
    let libraries = MySqlLibraryDao::new(db.pool());
    let courses = MySqlCourseDao::new(db.pool());
    let books = MySqlBookDao::new(db.pool());

    let library = libraries.create(&create_test_library("Main")).await.expect("create");
    let course = courses.create(&create_test_course("CS301")).await.expect("create");
    let book = books.create(&create_test_book("B30", library)).await.expect("create");

    books.mark_with_course(book, course).await.expect("Mark failed");
    let listed = books.find_for_course(course).await.expect("Query failed");
    assert!(listed.iter().any(|b| b.id == Some(book)));

    assert_eq!(books.unmark_with_course(book, course).await.expect("Unmark failed"), 1);
    let listed = books.find_for_course(course).await.expect("Query failed");
    assert!(listed.iter().all(|b| b.id != Some(book)));
}

#[tokio::test]
async fn test_books_for_student_follow_enrollment() {
    let db = TestDatabase::new().await;
    let libraries = MySqlLibraryDao::new(db.pool());
    let courses = MySqlCourseDao::new(db.pool());
    let books = MySqlBookDao::new(db.pool());
    let students = MySqlStudentDao::new(db.pool());

    let library = libraries.create(&create_test_library("Main")).await.expect("create");
    let course = courses.create(&create_test_course("CS302")).await.expect("create");
    let book = books.create(&create_test_book("B31", library)).await.expect("create");
    books.mark_with_course(book, course).await.expect("Mark failed");
    let student = students.create(&create_test_student("R503", 3.4)).await.expect("create");

    assert!(students.find_books(student).await.expect("Query failed").is_empty());

    students.add_to_course(student, course).await.expect("Enroll failed");
    let found = students.find_books(student).await.expect("Query failed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(book));

    assert_eq!(students.remove_from_course(student, course).await.expect("Remove failed"), 1);
    assert!(students.find_books(student).await.expect("Query failed").is_empty());
}

#[tokio::test]
async fn test_book_shared_by_two_courses_is_listed_once_for_student() {
    let db = TestDatabase::new().await;
    let libraries = MySqlLibraryDao::new(db.pool());
    let courses = MySqlCourseDao::new(db.pool());
    let books = MySqlBookDao::new(db.pool());
    let students = MySqlStudentDao::new(db.pool());

    let library = libraries.create(&create_test_library("Main")).await.expect("create");
    let first = courses.create(&create_test_course("CS303")).await.expect("create");
    let second = courses.create(&create_test_course("CS304")).await.expect("create");
    let book = books.create(&create_test_book("B32", library)).await.expect("create");
    books.mark_with_course(book, first).await.expect("Mark failed");
    books.mark_with_course(book, second).await.expect("Mark failed");

    let student = students.create(&create_test_student("R504", 3.0)).await.expect("create");
    students.add_to_course(student, first).await.expect("Enroll failed");
    students.add_to_course(student, second).await.expect("Enroll failed");

    let found = students.find_books(student).await.expect("Query failed");
    assert_eq!(found.len(), 1);
}
