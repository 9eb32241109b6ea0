//! Domain model for todo item management.
//!
//! The todo domain models item creation defaults, field validation, and
//! partial-update application while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod item;
mod status;

pub use error::{ParseTodoStatusError, TodoDomainError};
pub use ids::{Description, Title, TodoId};
pub use item::{PersistedTodoData, TodoItem, TodoPatch};
pub use status::TodoStatus;
