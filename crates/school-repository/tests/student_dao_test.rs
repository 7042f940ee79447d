//! Integration tests for the MySQL student DAO.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::{create_test_course, create_test_student, TestDatabase};
use school_core::{Entity, SchoolError, StudentId};
use school_repository::{Dao, DatabasePoolInterface, MySqlCourseDao, MySqlStudentDao, StudentDao};

#[tokio::test]
async fn test_create_and_read_round_trip() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    let student = create_test_student("R401", 3.5);
    let id = dao.create(&student).await.expect("Failed to create student");

    let found = dao
        .read(id)
        .await
        .expect("Query failed")
        .expect("Student not found");

    assert_eq!(found, student.with_id(id));
}

#[tokio::test]
async fn test_read_missing_id_is_absent() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    let result = dao.read(StudentId::new(999)).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    let affected = dao.delete(StudentId::new(999)).await.expect("Delete failed");
    assert_eq!(affected, 0);
    assert!(dao.read(StudentId::new(999)).await.expect("Query failed").is_none());
}

#[tokio::test]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    let id = dao
        .create(&create_test_student("R402", 2.8))
        .await
        .expect("Failed to create student");

    assert_eq!(dao.delete(id).await.expect("Delete failed"), 1);
    assert!(dao.read(id).await.expect("Query failed").is_none());
}

#[tokio::test]
async fn test_duplicate_roll_number_is_conflict() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    dao.create(&create_test_student("R403", 3.0))
        .await
        .expect("Failed to create student");

    let err = dao
        .create(&create_test_student("R403", 3.1))
        .await
        .expect_err("Duplicate roll number must fail");

    assert!(matches!(err, SchoolError::Conflict(_)));
    assert!(err.is_constraint_violation());
}

#[tokio::test]
async fn test_find_all_empty_and_populated() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    assert!(dao.find_all().await.expect("Query failed").is_empty());

    dao.create(&create_test_student("R404", 3.0)).await.expect("create");
    dao.create(&create_test_student("R405", 3.3)).await.expect("create");

    let all = dao.find_all().await.expect("Query failed");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_find_by_roll_number() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    dao.create(&create_test_student("R406", 3.7)).await.expect("create");

    let found = dao
        .find_by_roll_number("R406")
        .await
        .expect("Query failed")
        .expect("Student not found");
    assert_eq!(found.cgpa, 3.7);

    assert!(dao.find_by_roll_number("NOPE").await.expect("Query failed").is_none());
}

#[tokio::test]
async fn test_update_address_by_roll_number() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    let id = dao.create(&create_test_student("R407", 3.0)).await.expect("create");

    let affected = dao
        .update_address("R407", "99 New Street")
        .await
        .expect("Update failed");
    assert_eq!(affected, 1);

    let found = dao.read(id).await.expect("Query failed").expect("Student not found");
    assert_eq!(found.address, "99 New Street");
}

#[tokio::test]
async fn test_update_address_unknown_roll_number_affects_nothing() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    let affected = dao.update_address("NOPE", "Anywhere").await.expect("Update failed");
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn test_update_cgpa() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    let id = dao.create(&create_test_student("R408", 3.0)).await.expect("create");

    assert_eq!(dao.update_cgpa(id, 3.25).await.expect("Update failed"), 1);
    let found = dao.read(id).await.expect("Query failed").expect("Student not found");
    assert_eq!(found.cgpa, 3.25);
}

#[tokio::test]
async fn test_topper_of_empty_table_is_absent() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    assert!(dao.find_topper().await.expect("Query failed").is_none());
}

#[tokio::test]
async fn test_topper_is_highest_cgpa() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    dao.create(&create_test_student("R409", 3.2)).await.expect("create");
    let best = dao.create(&create_test_student("R410", 3.9)).await.expect("create");

    let topper = dao
        .find_topper()
        .await
        .expect("Query failed")
        .expect("Topper not found");

    assert_eq!(topper.id, Some(best));
    assert_eq!(topper.cgpa, 3.9);
}

#[tokio::test]
async fn test_remove_missing_enrollment_is_noop() {
    let db = TestDatabase::new().await;
    let students = MySqlStudentDao::new(db.pool());
    let courses = MySqlCourseDao::new(db.pool());

    let student = students.create(&create_test_student("R411", 3.0)).await.expect("create");
    let course = courses.create(&create_test_course("CS411")).await.expect("create");

    let removed = students
        .remove_from_course(student, course)
        .await
        .expect("Remove failed");
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_enrollment_in_missing_course_is_foreign_key_violation() {
    let db = TestDatabase::new().await;
    let students = MySqlStudentDao::new(db.pool());

    let student = students.create(&create_test_student("R412", 3.0)).await.expect("create");

    let err = students
        .add_to_course(student, 4040.into())
        .await
        .expect_err("Missing course must fail");
    assert!(matches!(err, SchoolError::ForeignKey(_)));
}

#[tokio::test]
async fn test_map_rows_preserves_row_order() {
    let db = TestDatabase::new().await;
    let dao = MySqlStudentDao::new(db.pool());

    dao.create(&create_test_student("R413", 2.0)).await.expect("create");
    dao.create(&create_test_student("R414", 3.0)).await.expect("create");
    dao.create(&create_test_student("R415", 4.0)).await.expect("create");

    let rows = sqlx::query(
        "SELECT id, roll_number, name, dob, address, cgpa FROM students ORDER BY cgpa DESC",
    )
    .fetch_all(db.pool().inner())
    .await
    .expect("Query failed");

    let students = dao.map_rows(&rows).expect("Mapping failed");
    let rolls: Vec<&str> = students.iter().map(|s| s.roll_number.as_str()).collect();
    assert_eq!(rolls, vec!["R415", "R414", "R413"]);

    assert!(dao.map_rows(&[]).expect("Mapping failed").is_empty());
}
