//! # School Repository
//!
//! MySQL data access for the school schema:
//!
//! ```text
//! SchoolService
//!   ↓  Arc<dyn StudentDao> / Arc<dyn BookDao> / …   (DAO interfaces)
//! MySqlDao<Student> / MySqlDao<Book> / …             (one generic impl)
//!   ↓  Arc<dyn DatabasePoolInterface>                (shared handle)
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                  ← DatabasePool (shaku component)
//!   record.rs                ← Record: table/column mapping
//!   dao/
//!     base_dao.rs            ← Dao<T> shared contract
//!     student_dao.rs …       ← per-entity traits
//!     impl/mysql/
//!       mysql_dao.rs         ← MySqlDao<T>
//!       records.rs           ← Record impls for the five entities
//!       student_dao_impl.rs …
//! ```
//!
//! Each operation runs as one statement on the shared handle; nothing here
//! opens transactions.

pub mod dao;
pub mod pool;
pub mod record;

pub use dao::*;
pub use pool::*;
pub use record::*;
