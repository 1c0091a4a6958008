//! In-memory task list with the id-addressed mutations the board needs.
//!
//! The web client rebuilds this wholesale from every fetch. The
//! local-storage backend also uses it as its mutation engine, so toggle
//! and delete behave identically no matter which store is configured.

use super::Task;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskRepository {
    tasks: Vec<Task>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Adds a record, replacing any existing record with the same id.
    /// Mutations are whole-record replacements, so a duplicate id means
    /// a re-submission of the same task.
    pub fn add(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Flips the completion flag of the record with the given id.
    ///
    /// Completing stamps `completed` with `today`; reverting clears it,
    /// keeping the `completed`-iff-`done` invariant in both directions.
    /// Returns the updated record, or `None` for an unknown id (a
    /// no-op, not an error).
    pub fn toggle(&mut self, id: &str, today: &str) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = !task.done;
        task.completed = if task.done {
            today.to_string()
        } else {
            String::new()
        };
        Some(task)
    }

    /// Removes the record with the given id. Unknown ids are a no-op
    /// and return `false`.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }
}
