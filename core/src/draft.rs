//! The add-task form's working state and validation.

use crate::clock::Clock;
use crate::id::IdSource;
use crate::task::{Category, Task};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please enter a task title.")]
    MissingTitle,
}

/// Field values collected by the add-task form while it is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub owner: String,
    pub category: Category,
    pub added: String,
    pub notes: String,
}

impl TaskDraft {
    /// Fresh form defaults: today's date, the first category, empty
    /// text fields. Used every time the form becomes visible.
    pub fn new(today: &str) -> Self {
        Self {
            title: String::new(),
            owner: String::new(),
            category: Category::ACTIVE[0],
            added: today.to_string(),
            notes: String::new(),
        }
    }

    /// Validates the draft and builds the record to submit.
    ///
    /// Text fields are trimmed; a title that trims to nothing is
    /// rejected. A cleared date field falls back to today. The new
    /// record starts active with an empty completed date.
    pub fn build(&self, ids: &dyn IdSource, clock: &dyn Clock) -> Result<Task, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let added = self.added.trim();
        Ok(Task {
            id: ids.generate(),
            title: title.to_string(),
            owner: self.owner.trim().to_string(),
            category: self.category,
            added: if added.is_empty() {
                clock.today_iso()
            } else {
                added.to_string()
            },
            notes: self.notes.trim().to_string(),
            done: false,
            completed: String::new(),
        })
    }
}
