//! Storage adapters for todo item persistence.

pub mod memory;
pub mod sqlite;
