//! Diesel schema for todo item persistence.
//!
//! Timestamps are stored as RFC 3339 text so the file format stays
//! readable with any `SQLite` tooling; the status column holds the
//! canonical enumeration label.

diesel::table! {
    /// Todo item records keyed by identifier.
    todos (id) {
        /// Item identifier as canonical UUID text.
        id -> Text,
        /// Item title.
        title -> Text,
        /// Item description.
        description -> Text,
        /// Lifecycle status label.
        status -> Text,
        /// Creation timestamp, RFC 3339.
        created_at -> Text,
        /// Last mutation timestamp, RFC 3339.
        updated_at -> Text,
    }
}
