use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            h1 { "Dashboard" }
            p { "Current readings and actuator state across the installation." }

            div { class: "page-dashboard__panels",
                article { class: "panel",
                    h2 { "Levels" }
                    p { "Latest tank level reported by each field node." }
                }
                article { class: "panel",
                    h2 { "Events" }
                    p { "Recent pump, valve and alarm activity." }
                }
                article { class: "panel",
                    h2 { "Network" }
                    p { "Gateway and node connectivity." }
                }
            }
        }
    }
}
