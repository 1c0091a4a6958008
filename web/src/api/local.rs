//! LocalStorage-backed store for single-user deployments with no
//! reachable backend. The browser's storage is the durable copy, so
//! unlike the other stores there is no server round-trip to trust over
//! the local list.

use async_trait::async_trait;
use gloo_storage::{LocalStorage, Storage};
use taskboard_core::{Clock, Task, TaskRepository};

use super::{apply_to_repository, Mutation, StoreError, TaskStore};

const STORAGE_KEY: &str = "taskboard_tasks";

pub struct LocalStore<C: Clock> {
    clock: C,
}

impl<C: Clock> LocalStore<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn load(&self) -> TaskRepository {
        // Missing or unreadable storage starts an empty board.
        let tasks = LocalStorage::get::<Vec<Task>>(STORAGE_KEY).unwrap_or_default();
        TaskRepository::from_tasks(tasks)
    }

    fn save(&self, repo: &TaskRepository) -> Result<(), StoreError> {
        LocalStorage::set(STORAGE_KEY, repo.tasks())
            .map_err(|err| StoreError::Protocol(err.to_string()))
    }
}

#[async_trait(?Send)]
impl<C: Clock> TaskStore for LocalStore<C> {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.load().into_tasks())
    }

    async fn submit(&self, mutation: Mutation) -> Result<Option<Task>, StoreError> {
        let mut repo = self.load();
        let affected = apply_to_repository(&mut repo, mutation, &self.clock);
        self.save(&repo)?;
        Ok(affected)
    }
}
