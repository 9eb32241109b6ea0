//! Identifier and validated scalar types for the todo domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a todo item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random todo identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a todo identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TodoId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, length-bounded item title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Maximum permitted title length, in characters.
    pub const MAX_CHARS: usize = 100;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the value is empty or
    /// whitespace-only, and [`TodoDomainError::TitleTooLong`] when the value
    /// exceeds [`Self::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }
        let length = raw.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TodoDomainError::TitleTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, unbounded item description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyDescription`] when the value is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TodoDomainError::EmptyDescription);
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
