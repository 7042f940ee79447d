//! Column mappings of the five entities.

use crate::record::{MySqlQuery, Record};
use school_core::{Book, Course, Library, Student, Teacher};
use sqlx::mysql::MySqlRow;
use sqlx::Row;

impl Record for Student {
    const TABLE: &'static str = "students";
    const ID_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["roll_number", "name", "dob", "address", "cgpa"];

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get::<i32, _>("id")?.into()),
            roll_number: row.try_get("roll_number")?,
            name: row.try_get("name")?,
            dob: row.try_get("dob")?,
            address: row.try_get("address")?,
            cgpa: row.try_get("cgpa")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.roll_number)
            .bind(&self.name)
            .bind(self.dob)
            .bind(&self.address)
            .bind(self.cgpa)
    }
}

impl Record for Teacher {
    const TABLE: &'static str = "teachers";
    const ID_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["emp_id", "name", "dob", "address", "salary"];

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get::<i32, _>("id")?.into()),
            emp_id: row.try_get("emp_id")?,
            name: row.try_get("name")?,
            dob: row.try_get("dob")?,
            address: row.try_get("address")?,
            salary: row.try_get("salary")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.emp_id)
            .bind(&self.name)
            .bind(self.dob)
            .bind(&self.address)
            .bind(self.salary)
    }
}

impl Record for Course {
    const TABLE: &'static str = "courses";
    const ID_COLUMN: &'static str = "course_id";
    const COLUMNS: &'static [&'static str] = &["course_code", "course_name", "course_description"];

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get::<i32, _>("course_id")?.into()),
            code: row.try_get("course_code")?,
            name: row.try_get("course_name")?,
            description: row.try_get("course_description")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.code)
            .bind(&self.name)
            .bind(&self.description)
    }
}

impl Record for Book {
    const TABLE: &'static str = "books";
    const ID_COLUMN: &'static str = "id";
    // `book_id` is the book code column, not a key.
    const COLUMNS: &'static [&'static str] = &["book_id", "title", "author", "library_id"];

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get::<i32, _>("id")?.into()),
            code: row.try_get("book_id")?,
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            library_id: row.try_get::<i32, _>("library_id")?.into(),
        })
    }

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.code)
            .bind(&self.title)
            .bind(&self.author)
            .bind(self.library_id.into_inner())
    }
}

impl Record for Library {
    const TABLE: &'static str = "libraries";
    const ID_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get::<i32, _>("id")?.into()),
            name: row.try_get("name")?,
        })
    }

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name)
    }
}
