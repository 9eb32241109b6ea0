//! Todo item aggregate root and partial-update patch type.

use super::{Description, Title, TodoId, TodoStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Todo item aggregate root.
///
/// Identifier and timestamps are assigned by the service layer through the
/// injected clock; storage persists them verbatim. Fields stay private so
/// every constructed value satisfies the domain invariants: a stable
/// identifier, validated title and description, and
/// `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    id: TodoId,
    title: Title,
    description: Description,
    status: TodoStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted item identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description.
    pub description: Description,
    /// Persisted lifecycle status.
    pub status: TodoStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new pending item with a fresh identifier.
    ///
    /// Both timestamps are read from the clock once, so a newly created
    /// item always has `created_at == updated_at`.
    #[must_use]
    pub fn new(title: Title, description: Description, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TodoId::new(),
            title,
            description,
            status: TodoStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the item title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the item description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial-update patch.
    ///
    /// Set fields overwrite their counterparts; unset fields retain their
    /// prior values. `updated_at` is refreshed regardless of how many
    /// fields the patch carries, so an empty patch is a pure touch.
    pub fn apply_patch(&mut self, patch: TodoPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Partial set of field updates for a todo item.
///
/// Each field is independently present or absent. An absent field means
/// "leave unchanged"; there is no way to express "clear", which is the
/// right shape for mandatory fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    title: Option<Title>,
    description: Option<Description>,
    status: Option<TodoStatus>,
}

impl TodoPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title field.
    #[must_use]
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the description field.
    #[must_use]
    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the status field.
    #[must_use]
    pub const fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}
