use dioxus::prelude::*;
use taskboard_core::{Task, TaskId};

/// One active task: title, metadata line, and the complete and delete
/// controls.
#[component]
pub fn TaskRow(
    task: Task,
    on_toggle: EventHandler<TaskId>,
    on_delete: EventHandler<TaskId>,
) -> Element {
    let owner = display_owner(&task);
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    rsx! {
        div { class: "task",
            div { class: "task-body",
                div { class: "task-title", "{task.title}" }
                div { class: "task-meta",
                    span {
                        b { "Owner: " }
                        "{owner}"
                    }
                    span {
                        b { "Added: " }
                        "{task.added}"
                    }
                    if !task.notes.is_empty() {
                        span {
                            b { "Notes: " }
                            "{task.notes}"
                        }
                    }
                }
            }
            div { class: "task-actions",
                button {
                    class: "btn btn-done",
                    title: "Mark complete",
                    onclick: move |_| on_toggle.call(toggle_id.clone()),
                    "✔"
                }
                button {
                    class: "btn btn-delete",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "🗑"
                }
            }
        }
    }
}

/// One completed task: adds the category label and completion date,
/// rendered with done styling, plus an Undo control to reopen it.
#[component]
pub fn CompletedRow(task: Task, on_undo: EventHandler<TaskId>) -> Element {
    let owner = display_owner(&task);
    let undo_id = task.id.clone();
    rsx! {
        div { class: "task done",
            div { class: "task-body",
                div { class: "task-title", "{task.title}" }
                div { class: "task-meta",
                    span {
                        b { "Owner: " }
                        "{owner}"
                    }
                    span {
                        b { "Category: " }
                        "{task.category}"
                    }
                    span {
                        b { "Added: " }
                        "{task.added}"
                    }
                    span {
                        b { "Completed: " }
                        "{task.completed}"
                    }
                    if !task.notes.is_empty() {
                        span {
                            b { "Notes: " }
                            "{task.notes}"
                        }
                    }
                }
            }
            div { class: "task-actions",
                button {
                    class: "btn",
                    title: "Reopen task",
                    onclick: move |_| on_undo.call(undo_id.clone()),
                    "Undo"
                }
            }
        }
    }
}

fn display_owner(task: &Task) -> String {
    if task.owner.is_empty() {
        "—".to_string()
    } else {
        task.owner.clone()
    }
}
