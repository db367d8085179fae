use dioxus::prelude::*;

const TABS: &[(&str, &str)] = &[
    ("sensors", "Sensors"),
    ("actuators", "Actuators"),
    ("connections", "Connections"),
];

/// Full configuration page. `tab` mirrors the `?tab=` selector carried by the
/// navbar's dropdown links; empty means the overview.
#[component]
pub fn Config(tab: String) -> Element {
    rsx! {
        section { class: "page page-config",
            h1 { "Configuration" }
            p { "Element inventory, thresholds and gateway wiring for the installation." }

            nav { class: "page-config__tabs",
                for (slug, label) in TABS {
                    {render_tab(slug, label, &tab)}
                }
            }
        }
    }
}

fn render_tab(slug: &str, label: &str, selected: &str) -> Element {
    let class = if slug == selected {
        "page-config__tab page-config__tab--active"
    } else {
        "page-config__tab"
    };
    let href = format!("/config?tab={slug}");

    rsx! {
        Link { class: "{class}", to: "{href}", "{label}" }
    }
}
