//! # School Core
//!
//! Core types, entity records, and error definitions shared by every
//! layer of the school data-access stack.

pub mod domain;
pub mod error;
pub mod id;
pub mod logging;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use logging::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
