//! In-memory adapters for todo item persistence.

mod todo;

pub use todo::InMemoryTodoRepository;
