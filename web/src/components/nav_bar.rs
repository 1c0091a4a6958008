use crate::Route;
use dioxus::prelude::*;

/// Top navigation shared by every view, with the router outlet below.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar-title", "Taskboard" }
            div { class: "navbar-links",
                Link { to: Route::BoardView {}, "Board" }
                Link { to: Route::CompletedView {}, "Completed" }
            }
        }
        Outlet::<Route> {}
    }
}
