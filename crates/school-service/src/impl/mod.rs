//! Service implementations.

mod school_service_impl;

pub use school_service_impl::SchoolServiceImpl;
