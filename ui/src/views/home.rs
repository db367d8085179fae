use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Mirante" }
            p { "Supervisory dashboard for the water telemetry installation." }
            p {
                "Live levels, pump activity and network health are on the "
                "dashboard; element inventory and thresholds live under "
                "configuration."
            }

            ul { class: "page-home__features",
                li { "Tank levels and flow readings from the field nodes" }
                li { "Pump and valve activity with event history" }
                li { "Daily, event and consumption reports" }
            }
        }
    }
}
