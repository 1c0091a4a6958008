//! The task record and the category vocabulary shared by every
//! component that touches the wire.

mod partition;
mod repository;

pub use partition::{Board, Bucket};
pub use repository::TaskRepository;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a task, assigned client-side at
/// creation and never reassigned.
pub type TaskId = String;

/// A single entry on the board.
///
/// `added` and `completed` are calendar date strings (`YYYY-MM-DD`).
/// `completed` is non-empty exactly when `done` is true; the toggle
/// paths maintain that invariant in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: String,
    pub category: Category,
    pub added: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub done: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: String,
}

impl Task {
    /// The display bucket this record belongs to. A completed record
    /// lands in the completed bucket no matter what its category says.
    pub fn bucket(&self) -> Bucket {
        if self.done {
            Bucket::Completed
        } else {
            Bucket::Active(self.category)
        }
    }
}

/// The fixed category vocabulary.
///
/// This is the one bidirectional mapping between wire keys and display
/// labels; nothing else in the workspace spells these strings out.
/// Backends have historically sent both the short keys and the full
/// labels, so [`Category::from_wire`] accepts either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Category {
    Drawings,
    Write,
    Review,
    Other,
}

impl Category {
    /// The four active categories in display order. The first entry is
    /// the add-form default.
    pub const ACTIVE: [Category; 4] = [
        Category::Drawings,
        Category::Write,
        Category::Review,
        Category::Other,
    ];

    /// Canonical short key written on every wire path.
    pub fn wire_key(self) -> &'static str {
        match self {
            Category::Drawings => "drawings",
            Category::Write => "write",
            Category::Review => "review",
            Category::Other => "other",
        }
    }

    /// Human-readable section heading.
    pub fn label(self) -> &'static str {
        match self {
            Category::Drawings => "Drawings to Review",
            Category::Write => "Reports to Write",
            Category::Review => "Reports to Review",
            Category::Other => "Other",
        }
    }

    /// Resolves a wire value, matching short keys and full labels
    /// case-sensitively. Anything unrecognized falls back to `Other`.
    pub fn from_wire(value: &str) -> Self {
        for category in Category::ACTIVE {
            if value == category.wire_key() || value == category.label() {
                return category;
            }
        }
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from_wire(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.wire_key().to_string()
    }
}
