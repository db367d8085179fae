use dioxus::prelude::*;

#[component]
pub fn DebugPanel() -> Element {
    rsx! {
        section { class: "page page-debug",
            h1 { "Debug" }
            p { "Raw packet traces and backend diagnostics for commissioning." }
        }
    }
}
