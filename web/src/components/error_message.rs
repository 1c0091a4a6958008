use dioxus::prelude::*;

/// Banner for surfacing load and mutation failures. Every failed
/// operation funnels through this one component, so errors look the
/// same no matter which action caused them.
#[component]
pub fn ErrorMessage(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error-banner",
            p { "{message}" }
            button {
                class: "error-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
