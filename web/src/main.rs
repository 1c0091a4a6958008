mod api;
mod components;
mod config;
mod state;
mod views;

use std::rc::Rc;

use crate::components::NavBar;
use crate::config::AppConfig;
use crate::views::{BoardView, CompletedView};
use dioxus::prelude::*;
use taskboard_core::{Clock, IdSource, SystemClock, UuidIdSource};

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

static CSS: Asset = asset!("assets/main.css");

#[component]
fn App() -> Element {
    let config = use_context_provider(AppConfig::from_env);
    use_context_provider(|| api::shared_store(&config));
    use_context_provider(|| Rc::new(UuidIdSource) as Rc<dyn IdSource>);
    use_context_provider(|| Rc::new(SystemClock) as Rc<dyn Clock>);
    state::provide_board();

    rsx! {
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavBar)]
    #[route("/")]
    BoardView,
    #[route("/completed")]
    CompletedView,
}
