//! # School Service
//!
//! Use-case facade over the school DAOs. Every method delegates to exactly
//! one DAO call, reports the outcome through `tracing` and hands the DAO
//! result back to the caller. No method groups several DAO calls into one
//! atomic unit.

pub mod di;
pub mod school_service;
pub mod r#impl;

pub use di::*;
pub use r#impl::SchoolServiceImpl;
pub use school_service::*;
