//! # School Config
//!
//! Configuration management for the school data-access layer.
//! Supports layered configuration from files and environment variables,
//! and runtime refresh.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
