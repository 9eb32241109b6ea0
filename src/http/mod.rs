//! Thin HTTP translation layer over the todo service.
//!
//! The HTTP layer is stateless: each handler decodes the request, makes
//! exactly one service call, and maps the outcome onto a status code. All
//! business rules live in [`crate::todo::services::TodoService`].

mod error;
mod routes;

pub use error::ApiError;
pub use routes::router;
