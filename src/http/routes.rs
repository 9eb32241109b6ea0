//! Route table and handlers for the todo API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::error::ApiError;
use crate::todo::domain::{TodoId, TodoItem, TodoStatus};
use crate::todo::ports::TodoRepository;
use crate::todo::services::{CreateTodoRequest, TodoService, UpdateTodoRequest};

/// Builds the todo API router around an injected service instance.
pub fn router<R, C>(service: Arc<TodoService<R, C>>) -> Router
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/todos", get(list_todos::<R, C>).post(create_todo::<R, C>))
        .route(
            "/todos/:id",
            get(get_todo::<R, C>)
                .patch(update_todo::<R, C>)
                .put(update_todo::<R, C>)
                .delete(delete_todo::<R, C>),
        )
        .with_state(service)
}

/// Request body for item creation.
#[derive(Debug, Deserialize)]
struct CreateTodoBody {
    title: String,
    description: String,
}

/// Request body for partial updates.
///
/// Absent keys and explicit `null` both deserialize to `None`, meaning
/// "leave unchanged".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateTodoBody {
    title: Option<String>,
    description: Option<String>,
    status: Option<TodoStatus>,
}

async fn create_todo<R, C>(
    State(service): State<Arc<TodoService<R, C>>>,
    Json(body): Json<CreateTodoBody>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    let item = service
        .create(CreateTodoRequest::new(body.title, body.description))
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn list_todos<R, C>(
    State(service): State<Arc<TodoService<R, C>>>,
) -> Result<Json<Vec<TodoItem>>, ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    let items = service.list().await?;
    Ok(Json(items))
}

async fn get_todo<R, C>(
    State(service): State<Arc<TodoService<R, C>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoItem>, ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    let item = service.get(TodoId::from_uuid(id)).await?;
    Ok(Json(item))
}

async fn update_todo<R, C>(
    State(service): State<Arc<TodoService<R, C>>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<Json<TodoItem>, ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    let mut request = UpdateTodoRequest::new();
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }

    let item = service.update(TodoId::from_uuid(id), request).await?;
    Ok(Json(item))
}

async fn delete_todo<R, C>(
    State(service): State<Arc<TodoService<R, C>>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    service.delete(TodoId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
