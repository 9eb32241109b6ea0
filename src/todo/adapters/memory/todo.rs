//! In-memory repository for todo item tests and ephemeral deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Single-record atomicity comes from the interior `RwLock`: every
/// operation takes the lock for its full duration, so readers never
/// observe a partially applied write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<HashMap<TodoId, TodoItem>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&item.id()) {
            return Err(TodoRepositoryError::Duplicate(item.id()));
        }
        state.insert(item.id(), item.clone());
        Ok(())
    }

    async fn get(&self, id: TodoId) -> TodoRepositoryResult<TodoItem> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .get(&id)
            .cloned()
            .ok_or(TodoRepositoryError::NotFound(id))
    }

    async fn list(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&item.id()) {
            return Err(TodoRepositoryError::NotFound(item.id()));
        }
        state.insert(item.id(), item.clone());
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
