//! Domain model: the five entity records of the school schema.

pub mod entities;

pub use entities::*;
