//! Form payloads and their validation.

use serde::Deserialize;
use serde_json::json;

use super::views::todos::FormValues;
use crate::domain::{Error, NewTask, TaskPatch, TaskTitle};

/// Create/edit form body. Missing fields decode as empty strings so that
/// validation, not extraction, reports them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TaskForm {
    /// Trim both fields and require a title.
    fn validated(&self) -> Result<(TaskTitle, String), Error> {
        let title = TaskTitle::new(&self.title).map_err(|_| {
            Error::validation_rejected("Title is required").with_details(json!({ "field": "title" }))
        })?;
        Ok((title, self.description.trim().to_owned()))
    }

    pub fn to_new_task(&self) -> Result<NewTask, Error> {
        let (title, description) = self.validated()?;
        Ok(NewTask::new(title, description))
    }

    pub fn to_patch(&self) -> Result<TaskPatch, Error> {
        let (title, description) = self.validated()?;
        Ok(TaskPatch::default().title(title).description(description))
    }

    /// Values to echo back when the form is re-rendered.
    pub fn values(&self) -> FormValues {
        FormValues {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Page a quick action returns to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnTo {
    List,
    #[default]
    Detail,
}

/// Body of the toggle and delete forms.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct QuickActionForm {
    #[serde(default)]
    pub return_to: ReturnTo,
}
