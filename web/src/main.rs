use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::{Config, Dashboard, DebugPanel, Home, QuickEdit, Reports};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteChrome)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/config?:tab")]
    Config { tab: String },
    #[route("/quick-edit")]
    QuickEdit {},
    #[route("/debug")]
    DebugPanel {},
    #[route("/reports?:kind")]
    Reports { kind: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Layout shared by every dashboard route: the navbar (which owns the health
/// poller) above the routed page body. A route placed outside this layout
/// gets neither.
#[component]
fn SiteChrome() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        AppNavbar { current_path }
        main { class: "page-shell",
            Outlet::<Route> {}
        }
    }
}
