//! Result type aliases.

use crate::SchoolError;

/// A specialized `Result` type for school data-access operations.
pub type SchoolResult<T> = Result<T, SchoolError>;
