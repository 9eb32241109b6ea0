//! Diesel row models for todo item persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Item identifier as canonical UUID text.
    pub id: String,
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Lifecycle status label.
    pub status: String,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last mutation timestamp, RFC 3339.
    pub updated_at: String,
}

/// Insert model for todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Item identifier as canonical UUID text.
    pub id: String,
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Lifecycle status label.
    pub status: String,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last mutation timestamp, RFC 3339.
    pub updated_at: String,
}

/// Changeset for updating the mutable columns of an existing record.
///
/// Identifier and creation timestamp are deliberately absent: both are
/// immutable after the initial insert.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: String,
    /// Replacement status label.
    pub status: String,
    /// Replacement mutation timestamp, RFC 3339.
    pub updated_at: String,
}
