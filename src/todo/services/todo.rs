//! Service layer for todo item creation, retrieval, and mutation.

use crate::todo::{
    domain::{Description, Title, TodoDomainError, TodoId, TodoItem, TodoPatch, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    title: String,
    description: String,
}

impl CreateTodoRequest {
    /// Creates a request from raw caller input.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Partial-update request for an existing todo item.
///
/// Each field is independently optional. An unset field leaves the stored
/// value unchanged; a request with no fields set is legal and only
/// refreshes the item's `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TodoStatus>,
}

impl UpdateTodoRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for todo item operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Caller-supplied data violated a field constraint.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo item orchestration service.
///
/// The service is the single source of truth for "now": identifier and
/// timestamp assignment happen here, never in storage. Construct one
/// instance at startup and hand it to the HTTP layer; there is no ambient
/// global state.
#[derive(Clone)]
pub struct TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new pending item from caller input.
    ///
    /// Validation happens before storage is consulted, so a rejected
    /// request never persists anything.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] for an empty or over-length
    /// title or an empty description, and [`TodoServiceError::Repository`]
    /// when persistence fails.
    pub async fn create(&self, request: CreateTodoRequest) -> TodoServiceResult<TodoItem> {
        let title = Title::new(request.title)?;
        let description = Description::new(request.description)?;
        let item = TodoItem::new(title, description, &*self.clock);
        self.repository.create(&item).await?;
        Ok(item)
    }

    /// Retrieves an item by identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`TodoRepositoryError::NotFound`] unchanged when the item
    /// does not exist.
    pub async fn get(&self, id: TodoId) -> TodoServiceResult<TodoItem> {
        let result: TodoRepositoryResult<TodoItem> = self.repository.get(id).await;
        Ok(result?)
    }

    /// Returns all items.
    ///
    /// An empty collection is a normal result, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the listing itself
    /// fails.
    pub async fn list(&self) -> TodoServiceResult<Vec<TodoItem>> {
        let result: TodoRepositoryResult<Vec<TodoItem>> = self.repository.list().await;
        Ok(result?)
    }

    /// Applies a partial update to an existing item.
    ///
    /// Set fields are validated and overwrite their stored counterparts;
    /// unset fields are untouched. `updated_at` is refreshed even for an
    /// empty request. A validation failure leaves the stored item exactly
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when a set field violates
    /// its constraint, and propagates [`TodoRepositoryError::NotFound`]
    /// unchanged when the item does not exist.
    pub async fn update(
        &self,
        id: TodoId,
        request: UpdateTodoRequest,
    ) -> TodoServiceResult<TodoItem> {
        // Fail fast: reject invalid input before any storage I/O.
        let mut patch = TodoPatch::new();
        if let Some(title) = request.title {
            patch = patch.with_title(Title::new(title)?);
        }
        if let Some(description) = request.description {
            patch = patch.with_description(Description::new(description)?);
        }
        if let Some(status) = request.status {
            patch = patch.with_status(status);
        }

        let mut item = self.repository.get(id).await?;
        item.apply_patch(patch, &*self.clock);
        self.repository.update(&item).await?;
        Ok(item)
    }

    /// Removes an item by identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`TodoRepositoryError::NotFound`] unchanged when the item
    /// does not exist.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        let result: TodoRepositoryResult<()> = self.repository.delete(id).await;
        Ok(result?)
    }
}
