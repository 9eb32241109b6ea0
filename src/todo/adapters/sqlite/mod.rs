//! `SQLite` adapters for durable todo item persistence.

mod models;
mod repository;
mod schema;

pub use repository::{SqliteTodoRepository, TodoSqlitePool};
