//! Shared navigation bar rendered on every dashboard page.
//!
//! The menu contents come from `core::nav::MENU`; this component only turns
//! that table into markup, wires the mobile toggle and hosts the backend
//! status indicator. It takes the current route path as a plain string so the
//! crate stays agnostic of the binary's route enum; link targets are opaque
//! path strings handed to the router.

use dioxus::prelude::*;

use crate::components::status_indicator::{use_backend_status, StatusIndicator};
use crate::core::nav::{self, DropdownItem, MenuEntry, MenuToggle, PageLink};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn AppNavbar(current_path: String) -> Element {
    let current_page = nav::page_from_path(&current_path);
    let mut menu = use_signal(MenuToggle::default);
    let status = use_backend_status();

    let open = menu().is_open();
    let toggle_class = if open {
        "navbar__toggle navbar__toggle--open"
    } else {
        "navbar__toggle"
    };
    let links_class = if open {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "navbar",
            if open {
                // Catches clicks landing outside the navigation while the
                // mobile menu is open; the navbar itself sits above it.
                div {
                    class: "navbar__backdrop",
                    onclick: move |_| menu.write().dismiss(),
                }
            }

            div { class: "navbar__inner",
                Link { class: "navbar__brand", to: "/",
                    span { class: "navbar__brand-drop", aria_hidden: "true", "💧" }
                    span { class: "navbar__brand-copy",
                        span { class: "navbar__brand-mark", "Mirante" }
                        span { class: "navbar__brand-subtitle", "Supervisory dashboard" }
                    }
                }

                nav { class: "{links_class}",
                    for entry in nav::MENU {
                        {render_entry(entry, &current_page, menu)}
                    }

                    StatusIndicator { status: status() }
                }

                button {
                    r#type: "button",
                    class: "{toggle_class}",
                    aria_label: "Toggle navigation",
                    onclick: move |_| menu.write().toggle(),
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

fn render_entry(entry: &'static MenuEntry, current_page: &str, menu: Signal<MenuToggle>) -> Element {
    match entry {
        MenuEntry::Page(link) => render_link(link, current_page, "navbar__link", menu),
        MenuEntry::Dropdown { label, icon, items } => rsx! {
            div { class: "navbar__item navbar__item--dropdown",
                span { class: "navbar__link",
                    span { class: "navbar__icon", aria_hidden: "true", "{icon}" }
                    "{label}"
                    span { class: "navbar__caret", aria_hidden: "true", "▾" }
                }
                div { class: "navbar__dropdown",
                    for item in *items {
                        {render_dropdown_item(item, current_page, menu)}
                    }
                }
            }
        },
    }
}

fn render_dropdown_item(
    item: &'static DropdownItem,
    current_page: &str,
    menu: Signal<MenuToggle>,
) -> Element {
    match item {
        DropdownItem::Link(link) => render_link(link, current_page, "navbar__dropdown-item", menu),
        DropdownItem::Divider => rsx! {
            div { class: "navbar__divider" }
        },
    }
}

fn render_link(
    link: &'static PageLink,
    current_page: &str,
    base_class: &'static str,
    mut menu: Signal<MenuToggle>,
) -> Element {
    let class = if nav::is_active(link.page, current_page) {
        format!("{base_class} {base_class}--active")
    } else {
        base_class.to_string()
    };

    rsx! {
        Link {
            class: "{class}",
            to: link.href,
            // A full page load used to reset the collapsed menu; an SPA
            // navigation has to close it explicitly.
            onclick: move |_| menu.write().dismiss(),
            span { class: "navbar__icon", aria_hidden: "true", "{link.icon}" }
            "{link.label}"
        }
    }
}
