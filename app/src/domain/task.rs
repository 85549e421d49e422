//! Task data model.
//!
//! A task is the only entity the application manages. Identifiers are
//! positive integers allocated by the store; titles are trimmed and never
//! empty; the creation timestamp is fixed once the record exists.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors raised while building task values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskValidationError {
    /// The title was empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,
    /// The identifier was zero or not a number.
    #[error("task id must be a positive integer, got '{value}'")]
    InvalidId {
        /// Raw identifier as received.
        value: String,
    },
}

/// Positive integer identifier assigned by the store.
///
/// # Examples
/// ```
/// use todo_app::domain::TaskId;
///
/// let id: TaskId = "42".parse().expect("valid id");
/// assert_eq!(id.get(), 42);
/// assert!("0".parse::<TaskId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(NonZeroU64);

impl TaskId {
    /// Wrap a raw value, rejecting zero.
    pub fn new(value: u64) -> Result<Self, TaskValidationError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| TaskValidationError::InvalidId {
                value: value.to_string(),
            })
    }

    /// The first identifier handed out by an empty store.
    #[must_use]
    pub const fn first() -> Self {
        Self(NonZeroU64::MIN)
    }

    /// Identifier following this one; `None` once the range is used up.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = TaskValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or_else(|| TaskValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

/// Trimmed, non-empty task title.
///
/// ## Invariants
/// - never empty
/// - no leading or trailing whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Trim and validate a title.
    ///
    /// # Examples
    /// ```
    /// use todo_app::domain::TaskTitle;
    ///
    /// let title = TaskTitle::new("  Water plants ").expect("valid title");
    /// assert_eq!(title.as_ref(), "Water plants");
    /// assert!(TaskTitle::new("   ").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

/// A task record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Display title.
    pub title: TaskTitle,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp; never changes after creation.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Apply a partial update in place. Fields absent from `patch` are kept.
    ///
    /// The identifier and creation timestamp are not part of [`TaskPatch`]
    /// and therefore cannot change.
    pub fn apply(&mut self, patch: TaskPatch) {
        let TaskPatch {
            title,
            description,
            completed,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(completed) = completed {
            self.completed = completed;
        }
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Validated title.
    pub title: TaskTitle,
    /// Description, stored as given.
    pub description: String,
}

impl NewTask {
    /// Build creation input from a title and description.
    #[must_use]
    pub fn new(title: TaskTitle, description: impl Into<String>) -> Self {
        Self {
            title,
            description: description.into(),
        }
    }
}

/// Partial update; each field is independently optional.
///
/// # Examples
/// ```
/// use todo_app::domain::TaskPatch;
///
/// let patch = TaskPatch::default().completed(true);
/// assert_eq!(patch.completed, Some(true));
/// assert!(patch.title.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Set the replacement title.
    #[must_use]
    pub fn title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the replacement description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the replacement completion flag.
    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}
