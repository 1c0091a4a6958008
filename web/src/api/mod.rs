//! The boundary between the board and whichever backing store is
//! configured. Everything past this module speaks [`Task`] and
//! [`StoreError`]; nothing else in the crate knows about wire shapes.

mod envelope;
mod http;
mod local;
mod snapshot;

pub use http::HttpStore;
pub use local::LocalStore;
pub use snapshot::SnapshotStore;

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use taskboard_core::{Clock, SystemClock, Task, TaskId, TaskRepository};
use thiserror::Error;
use tracing::info;

use crate::config::{AppConfig, BackendKind};

/// Failure taxonomy for store calls. Every store collapses its
/// failures into these three cases at the adapter boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the JSON shape the board understands.
    #[error("unreadable backend response: {0}")]
    Protocol(String),
    /// A well-formed envelope marked the call as failed.
    #[error("{0}")]
    Application(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Protocol(err.to_string())
    }
}

/// A tagged write issued against the backing store.
///
/// Serializes to the wire body: `{"action":"add","task":{...}}`,
/// `{"action":"toggle","id":"..."}` or `{"action":"delete","id":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Mutation {
    Add { task: Task },
    Toggle { id: TaskId },
    Delete { id: TaskId },
}

impl Mutation {
    /// Message used when a failure envelope carries no text of its own.
    fn fallback_error(&self) -> &'static str {
        match self {
            Mutation::Add { .. } => "Add failed",
            Mutation::Toggle { .. } => "Toggle failed",
            Mutation::Delete { .. } => "Delete failed",
        }
    }
}

/// One backing store.
///
/// Callers re-fetch after every successful submit; a local mutation is
/// never trusted as final state.
#[async_trait(?Send)]
pub trait TaskStore {
    /// Reads the full task list.
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Applies one mutation, returning the affected record when the
    /// backend echoes it back.
    async fn submit(&self, mutation: Mutation) -> Result<Option<Task>, StoreError>;
}

pub type SharedStore = Rc<dyn TaskStore>;

/// Builds the store selected by configuration.
pub fn shared_store(config: &AppConfig) -> SharedStore {
    info!(backend = ?config.backend, "configuring task store");
    match config.backend {
        BackendKind::Remote => Rc::new(HttpStore::new(config.api_url.clone())),
        BackendKind::Snapshot => Rc::new(SnapshotStore::new(config.api_url.clone(), SystemClock)),
        BackendKind::Local => Rc::new(LocalStore::new(SystemClock)),
    }
}

/// Shared mutation semantics for the stores that apply writes
/// themselves instead of delegating to a remote backend.
fn apply_to_repository(
    repo: &mut TaskRepository,
    mutation: Mutation,
    clock: &dyn Clock,
) -> Option<Task> {
    match mutation {
        Mutation::Add { task } => {
            repo.add(task.clone());
            Some(task)
        }
        Mutation::Toggle { id } => repo.toggle(&id, &clock.today_iso()).cloned(),
        Mutation::Delete { id } => {
            // Unknown ids fall through as a quiet no-op.
            repo.remove(&id);
            None
        }
    }
}
