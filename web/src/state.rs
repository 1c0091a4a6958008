//! Board state controller.
//!
//! One owner for the client-side task list; views read partitioned
//! snapshots from it and funnel every mutation back through it. Nothing
//! else in the crate holds task state.

use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use taskboard_core::{Board, RequestSeq, Task, TaskId};
use tracing::{debug, error};

use crate::api::{Mutation, SharedStore};
use crate::config::AppConfig;

/// Signal bundle owning the last-fetched task list plus load and error
/// state. Copyable so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct BoardController {
    store: Signal<SharedStore>,
    tasks: Signal<Vec<Task>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    seq: Signal<Rc<RequestSeq>>,
}

impl BoardController {
    /// Partitioned snapshot of the current list.
    pub fn board(&self) -> Board {
        Board::partition(&self.tasks.read())
    }

    /// True until the first fetch has settled.
    pub fn loading(&self) -> bool {
        *self.loading.read()
    }

    /// The message for the most recent failed operation, if any.
    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    pub fn dismiss_error(mut self) {
        self.error.set(None);
    }

    /// Fetches the full list and replaces the in-memory snapshot.
    ///
    /// Each reload takes a ticket; the response is applied only while
    /// its ticket is still the latest issued, so an old fetch that
    /// resolves late cannot overwrite newer state. On failure the
    /// previous list is kept and one error message is surfaced; the
    /// board shows stale data until the next successful refresh.
    pub async fn reload(mut self) {
        let ticket = self.seq.peek().begin();
        let store = Rc::clone(&self.store.peek());
        match store.fetch_all().await {
            Ok(tasks) => {
                if self.seq.peek().is_latest(ticket) {
                    self.tasks.set(tasks);
                    self.error.set(None);
                } else {
                    debug!(ticket, "dropping stale task list response");
                }
            }
            Err(err) => {
                error!("task list refresh failed: {err}");
                if self.seq.peek().is_latest(ticket) {
                    self.error.set(Some(format!("Could not load tasks: {err}")));
                }
            }
        }
        if *self.loading.peek() {
            self.loading.set(false);
        }
    }

    /// Submits one mutation and reloads on success. The submit result
    /// is never trusted as final state; the follow-up fetch is.
    /// Failures surface the same way for add, toggle, and delete.
    pub async fn apply(mut self, mutation: Mutation) {
        let verb = match &mutation {
            Mutation::Add { .. } => "save",
            Mutation::Toggle { .. } => "update",
            Mutation::Delete { .. } => "delete",
        };
        let store = Rc::clone(&self.store.peek());
        match store.submit(mutation).await {
            Ok(_) => self.reload().await,
            Err(err) => {
                error!("could not {verb} task: {err}");
                self.error.set(Some(format!("Could not {verb} task: {err}")));
            }
        }
    }

    pub async fn add(self, task: Task) {
        self.apply(Mutation::Add { task }).await;
    }

    pub async fn toggle(self, id: TaskId) {
        self.apply(Mutation::Toggle { id }).await;
    }

    pub async fn delete(self, id: TaskId) {
        self.apply(Mutation::Delete { id }).await;
    }
}

/// Creates the controller, shares it through context, and starts the
/// refresh loop. Called once from `App`.
pub fn provide_board() -> BoardController {
    let store = use_context::<SharedStore>();
    let config = use_context::<AppConfig>();
    let controller = BoardController {
        store: use_signal(|| store),
        tasks: use_signal(Vec::new),
        loading: use_signal(|| true),
        error: use_signal(|| None::<String>),
        seq: use_signal(|| Rc::new(RequestSeq::new())),
    };
    use_context_provider(|| controller);

    let refresh_ms = config.refresh_ms;
    use_future(move || async move {
        controller.reload().await;
        // Fixed period, no backoff, no pause on error: a failed cycle
        // logs and the next tick still fires, so a wall-mounted board
        // heals on its own once the backend is reachable again.
        let mut ticks = IntervalStream::new(refresh_ms);
        while ticks.next().await.is_some() {
            controller.reload().await;
        }
    });
    controller
}

/// Context accessor for views.
pub fn use_board() -> BoardController {
    use_context::<BoardController>()
}
