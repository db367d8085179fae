use dioxus::prelude::*;

/// Reports page. `kind` mirrors the `?kind=` selector carried by the navbar's
/// dropdown links; unrecognized or missing values fall back to the overview.
#[component]
pub fn Reports(kind: String) -> Element {
    let title = report_title(&kind);

    rsx! {
        section { class: "page page-reports",
            h1 { "{title}" }
            p { "Aggregated history for the selected window." }
        }
    }
}

fn report_title(kind: &str) -> &'static str {
    match kind {
        "daily" => "Daily report",
        "events" => "Event history",
        "consumption" => "Consumption analysis",
        "export" => "Data export",
        _ => "Reports",
    }
}
