use std::rc::Rc;

use dioxus::prelude::*;
use taskboard_core::{Category, Clock, IdSource, Task, TaskDraft};

/// The add-task form in its visible state.
///
/// The parent mounts this only while the form is open, so every open
/// starts from fresh defaults: today's date, the first category, empty
/// text fields. Save validates the draft and hands the built record
/// up; Cancel hands control back without submitting anything.
#[component]
pub fn AddTaskForm(on_save: EventHandler<Task>, on_cancel: EventHandler<()>) -> Element {
    let ids = use_context::<Rc<dyn IdSource>>();
    let clock = use_context::<Rc<dyn Clock>>();
    let today = clock.today_iso();
    let mut draft = use_signal(move || TaskDraft::new(&today));
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft.read().build(ids.as_ref(), clock.as_ref()) {
            Ok(task) => {
                error.set(None);
                on_save.call(task);
            }
            Err(validation) => error.set(Some(validation.to_string())),
        }
    };

    let current = draft.read().clone();
    let category_key = current.category.wire_key();

    rsx! {
        form { class: "add-form", onsubmit: handle_submit,
            h2 { "Add Task" }
            label { class: "field",
                span { "Title" }
                input {
                    r#type: "text",
                    placeholder: "What needs doing?",
                    value: "{current.title}",
                    autofocus: true,
                    oninput: move |evt| draft.write().title = evt.value(),
                }
            }
            label { class: "field",
                span { "Owner" }
                input {
                    r#type: "text",
                    value: "{current.owner}",
                    oninput: move |evt| draft.write().owner = evt.value(),
                }
            }
            label { class: "field",
                span { "Category" }
                select {
                    value: "{category_key}",
                    oninput: move |evt| draft.write().category = Category::from_wire(&evt.value()),
                    {Category::ACTIVE.iter().map(|category| rsx! {
                        option {
                            key: "{category.wire_key()}",
                            value: "{category.wire_key()}",
                            "{category}"
                        }
                    })}
                }
            }
            label { class: "field",
                span { "Added" }
                input {
                    r#type: "date",
                    value: "{current.added}",
                    oninput: move |evt| draft.write().added = evt.value(),
                }
            }
            label { class: "field",
                span { "Notes" }
                textarea {
                    value: "{current.notes}",
                    oninput: move |evt| draft.write().notes = evt.value(),
                }
            }
            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }
            div { class: "form-actions",
                button { r#type: "submit", class: "btn btn-primary", "Save" }
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
