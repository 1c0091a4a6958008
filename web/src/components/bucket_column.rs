use dioxus::prelude::*;
use taskboard_core::{Category, Task, TaskId};

use super::TaskRow;

/// One active category section: heading plus its ordered rows, or the
/// fixed placeholder when the bucket is empty.
#[component]
pub fn BucketColumn(
    category: Category,
    tasks: Vec<Task>,
    on_toggle: EventHandler<TaskId>,
    on_delete: EventHandler<TaskId>,
) -> Element {
    rsx! {
        section { class: "bucket",
            h2 { class: "bucket-title", "{category}" }
            if tasks.is_empty() {
                div { class: "task task-empty", "No tasks yet." }
            } else {
                {tasks.iter().map(|task| rsx! {
                    TaskRow {
                        key: "{task.id}",
                        task: task.clone(),
                        on_toggle: move |id| on_toggle.call(id),
                        on_delete: move |id| on_delete.call(id),
                    }
                })}
            }
        }
    }
}
