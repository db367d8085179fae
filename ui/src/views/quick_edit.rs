use dioxus::prelude::*;

#[component]
pub fn QuickEdit() -> Element {
    rsx! {
        section { class: "page page-quick-edit",
            h1 { "Quick edit" }
            p {
                "Inline adjustments to element names and thresholds, without "
                "going through the full configuration flow."
            }
        }
    }
}
