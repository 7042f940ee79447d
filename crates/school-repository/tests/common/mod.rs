//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use school_config::DatabaseConfig;
use school_core::{Book, Course, Library, LibraryId, Student, Teacher};
use school_repository::{DatabasePool, DatabasePoolInterface};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::mysql::Mysql;

/// Test database container wrapper.
///
/// Manages a MySQL testcontainer lifecycle and provides the shared handle.
pub struct TestDatabase {
    _container: ContainerAsync<Mysql>,
    pool: Arc<DatabasePool>,
    config: DatabaseConfig,
}

impl TestDatabase {
    /// Creates a new test database with a fresh MySQL container.
    ///
    /// Runs migrations automatically after container startup.
    pub async fn new() -> Self {
        let container = Mysql::default()
            .with_env_var("MYSQL_ROOT_PASSWORD", "testpass")
            .with_env_var("MYSQL_DATABASE", "school_test")
            .with_env_var("MYSQL_USER", "school")
            .with_env_var("MYSQL_PASSWORD", "school")
            .start()
            .await
            .expect("Failed to start MySQL container");

        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get MySQL port");

        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port,
            name: "school_test".to_string(),
            username: "school".to_string(),
            password: "school".to_string(),
            connect_timeout_secs: 5,
            ..DatabaseConfig::default()
        };

        // Wait for MySQL to be ready and connect
        let pool = Self::connect_with_retry(&config, 30).await;

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            _container: container,
            pool: Arc::new(pool),
            config,
        }
    }

    /// Returns the shared handle as the DAOs take it.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.pool.clone()
    }

    /// Connection settings of the running container.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Connects to the database with retry logic.
    async fn connect_with_retry(config: &DatabaseConfig, max_attempts: u32) -> DatabasePool {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match DatabasePool::connect(config).await {
                Ok(pool) => return pool,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!(
                            "Failed to connect to database after {} attempts: {}",
                            max_attempts, e
                        );
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn create_test_student(roll_number: &str, cgpa: f32) -> Student {
    Student::new(roll_number, "Test Student", date(2001, 5, 17), "12 College Road", cgpa)
}

pub fn create_test_teacher(emp_id: &str, salary: f32) -> Teacher {
    Teacher::new(emp_id, "Test Teacher", date(1980, 3, 2), "7 Faculty Lane", salary)
}

pub fn create_test_course(code: &str) -> Course {
    Course::new(code, "Databases", "Relational storage and SQL")
}

pub fn create_test_library(name: &str) -> Library {
    Library::new(name)
}

pub fn create_test_book(code: &str, library_id: LibraryId) -> Book {
    Book::new(code, "Test Title", "Author X", library_id)
}
