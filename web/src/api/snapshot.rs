//! Read-only store seeded from a static JSON file.
//!
//! Writes mutate the seeded copy in memory and never reach the remote
//! file. Single-user demo deployments only.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use taskboard_core::{Clock, Task, TaskRepository};
use tracing::info;

use super::envelope::parse_task_list;
use super::{apply_to_repository, Mutation, StoreError, TaskStore};

pub struct SnapshotStore<C: Clock> {
    client: reqwest::Client,
    url: String,
    clock: C,
    seeded: Cell<bool>,
    repo: RefCell<TaskRepository>,
}

impl<C: Clock> SnapshotStore<C> {
    pub fn new(url: String, clock: C) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            clock,
            seeded: Cell::new(false),
            repo: RefCell::new(TaskRepository::new()),
        }
    }

    /// Fetches the snapshot file on the first call; later calls serve
    /// the in-memory copy so local writes survive refresh cycles.
    async fn seed(&self) -> Result<(), StoreError> {
        if self.seeded.get() {
            return Ok(());
        }
        let body = self.client.get(&self.url).send().await?.text().await?;
        let tasks = parse_task_list(&body)?;
        info!(count = tasks.len(), "seeded board from static snapshot");
        *self.repo.borrow_mut() = TaskRepository::from_tasks(tasks);
        self.seeded.set(true);
        Ok(())
    }
}

#[async_trait(?Send)]
impl<C: Clock> TaskStore for SnapshotStore<C> {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        self.seed().await?;
        Ok(self.repo.borrow().tasks().to_vec())
    }

    async fn submit(&self, mutation: Mutation) -> Result<Option<Task>, StoreError> {
        self.seed().await?;
        let mut repo = self.repo.borrow_mut();
        Ok(apply_to_repository(&mut repo, mutation, &self.clock))
    }
}
