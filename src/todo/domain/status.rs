//! Lifecycle status enumeration for todo items.

use super::ParseTodoStatusError;
use serde::{Deserialize, Serialize};

/// Todo item lifecycle status.
///
/// The enumeration is closed and flat: any status may replace any other,
/// so `Completed` back to `Pending` is a legal update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    /// Item has been created but work has not started.
    Pending,
    /// Item is being worked on.
    InProgress,
    /// Item has been completed.
    Completed,
}

impl TodoStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ParseTodoStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseTodoStatusError(value.to_owned())),
        }
    }
}
