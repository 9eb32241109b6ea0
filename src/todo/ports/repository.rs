//! Repository port for durable todo item persistence.

use crate::todo::domain::{TodoId, TodoItem};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo item persistence contract.
///
/// Implementations must make each operation atomic with respect to a
/// single record: a `get` racing an `update` or `delete` on the same
/// identifier observes either the fully-old or fully-new state, never a
/// torn write. Identifier and timestamps on the given items are persisted
/// verbatim; implementations never generate or override them.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new, fully-formed item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Duplicate`] when the item identifier
    /// already exists. Fresh identifier generation makes this unexpected,
    /// but it is checked rather than assumed.
    async fn create(&self, item: &TodoItem) -> TodoRepositoryResult<()>;

    /// Retrieves an item by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn get(&self, id: TodoId) -> TodoRepositoryResult<TodoItem>;

    /// Returns all stored items.
    ///
    /// Order is unspecified; callers must not rely on any particular one.
    async fn list(&self) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Replaces the mutable fields of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()>;

    /// Removes an item by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// An item with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    Duplicate(TodoId),

    /// The item was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
