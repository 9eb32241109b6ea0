//! Application services for todo item management.

mod todo;

pub use todo::{
    CreateTodoRequest, TodoService, TodoServiceError, TodoServiceResult, UpdateTodoRequest,
};
