use dioxus::prelude::*;

use crate::components::{CompletedRow, ErrorMessage, LoadingSpinner};
use crate::state::use_board;

/// The completed bucket, newest completion first, with Undo controls.
#[component]
pub fn CompletedView() -> Element {
    let board = use_board();
    let snapshot = board.board();

    let handle_undo = move |id| {
        spawn(async move { board.toggle(id).await });
    };

    rsx! {
        main { class: "page",
            div { class: "page-header",
                h1 { "Completed" }
            }
            if let Some(message) = board.error() {
                ErrorMessage { message, on_dismiss: move |_| board.dismiss_error() }
            }
            if board.loading() {
                LoadingSpinner { message: "Loading tasks...".to_string() }
            } else if snapshot.completed.is_empty() {
                div { class: "task task-empty", "No completed tasks." }
            } else {
                div { class: "completed-list",
                    {snapshot.completed.iter().map(|task| rsx! {
                        CompletedRow {
                            key: "{task.id}",
                            task: task.clone(),
                            on_undo: handle_undo,
                        }
                    })}
                }
            }
        }
    }
}
