use dioxus::prelude::*;
use taskboard_core::Category;

use crate::components::{AddTaskForm, BucketColumn, ErrorMessage, LoadingSpinner};
use crate::state::use_board;

/// The main board: the four active buckets side by side, with the
/// add-task form toggling above them.
#[component]
pub fn BoardView() -> Element {
    let board = use_board();
    let mut show_form = use_signal(|| false);

    let snapshot = board.board();

    let handle_toggle = move |id| {
        spawn(async move { board.toggle(id).await });
    };
    let handle_delete = move |id| {
        spawn(async move { board.delete(id).await });
    };

    rsx! {
        main { class: "page",
            div { class: "page-header",
                h1 { "Shared To-Do Board" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Close" } else { "Add Task" }
                }
            }
            if let Some(message) = board.error() {
                ErrorMessage { message, on_dismiss: move |_| board.dismiss_error() }
            }
            if show_form() {
                AddTaskForm {
                    on_save: move |task| {
                        show_form.set(false);
                        spawn(async move { board.add(task).await });
                    },
                    on_cancel: move |_| show_form.set(false),
                }
            }
            if board.loading() {
                LoadingSpinner { message: "Loading tasks...".to_string() }
            } else {
                div { class: "board-grid",
                    {Category::ACTIVE.iter().map(|category| rsx! {
                        BucketColumn {
                            key: "{category.wire_key()}",
                            category: *category,
                            tasks: snapshot.active(*category).to_vec(),
                            on_toggle: handle_toggle,
                            on_delete: handle_delete,
                        }
                    })}
                }
            }
        }
    }
}
