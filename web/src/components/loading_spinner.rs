use dioxus::prelude::*;

/// Placeholder shown while the first fetch is in flight.
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading-dot" }
            p { "{message}" }
        }
    }
}
