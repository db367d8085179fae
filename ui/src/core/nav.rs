//! Navigation model for the dashboard chrome.
//!
//! The menu is a fixed table rather than anything data-driven: the dashboard
//! has a known set of pages and two dropdown groups (configuration and
//! reports). Active-state matching compares the current page identifier,
//! derived from the route path, against the identifier each link carries.
//! Selector links that only differ by query string never match.

/// Sentinel page identifier for the root path.
pub const HOME_PAGE: &str = "home";

/// Derive the page identifier from a route path.
///
/// Takes the last path segment with any query string or fragment stripped.
/// An empty segment (root path or trailing slash) maps to [`HOME_PAGE`].
pub fn page_from_path(path: &str) -> String {
    let bare = path.split(['?', '#']).next().unwrap_or("");
    let segment = bare.rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        HOME_PAGE.to_string()
    } else {
        segment.to_string()
    }
}

/// Matching rule shared by top-level entries and dropdown children.
/// Links without a page identifier (query selectors) are never active.
pub fn is_active(entry_page: Option<&str>, current: &str) -> bool {
    entry_page == Some(current)
}

/// A single navigation link.
#[derive(Debug, Clone, Copy)]
pub struct PageLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    /// Identifier compared against the current page. `None` for selector
    /// links (e.g. report type or configuration tab) that should never be
    /// highlighted.
    pub page: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub enum DropdownItem {
    Link(PageLink),
    Divider,
}

#[derive(Debug, Clone, Copy)]
pub enum MenuEntry {
    Page(PageLink),
    Dropdown {
        label: &'static str,
        icon: &'static str,
        items: &'static [DropdownItem],
    },
}

/// The dashboard menu.
pub static MENU: &[MenuEntry] = &[
    MenuEntry::Page(PageLink {
        label: "Home",
        icon: "🏠",
        href: "/",
        page: Some(HOME_PAGE),
    }),
    MenuEntry::Page(PageLink {
        label: "Dashboard",
        icon: "📊",
        href: "/dashboard",
        page: Some("dashboard"),
    }),
    MenuEntry::Dropdown {
        label: "Configuration",
        icon: "⚙️",
        items: &[
            DropdownItem::Link(PageLink {
                label: "Full configuration",
                icon: "📝",
                href: "/config",
                page: Some("config"),
            }),
            DropdownItem::Link(PageLink {
                label: "Quick edit",
                icon: "✏️",
                href: "/quick-edit",
                page: Some("quick-edit"),
            }),
            DropdownItem::Divider,
            DropdownItem::Link(PageLink {
                label: "Sensors",
                icon: "📡",
                href: "/config?tab=sensors",
                page: None,
            }),
            DropdownItem::Link(PageLink {
                label: "Actuators",
                icon: "🔌",
                href: "/config?tab=actuators",
                page: None,
            }),
            DropdownItem::Link(PageLink {
                label: "Connections",
                icon: "🔗",
                href: "/config?tab=connections",
                page: None,
            }),
        ],
    },
    MenuEntry::Page(PageLink {
        label: "Debug",
        icon: "🐞",
        href: "/debug",
        page: Some("debug"),
    }),
    MenuEntry::Dropdown {
        label: "Reports",
        icon: "📄",
        items: &[
            DropdownItem::Link(PageLink {
                label: "Daily report",
                icon: "📅",
                href: "/reports?kind=daily",
                page: None,
            }),
            DropdownItem::Link(PageLink {
                label: "Event history",
                icon: "⚡",
                href: "/reports?kind=events",
                page: None,
            }),
            DropdownItem::Link(PageLink {
                label: "Consumption analysis",
                icon: "💧",
                href: "/reports?kind=consumption",
                page: None,
            }),
            DropdownItem::Divider,
            DropdownItem::Link(PageLink {
                label: "Export data",
                icon: "📥",
                href: "/reports?kind=export",
                page: None,
            }),
        ],
    },
];

/// Every link in the menu, dropdown children included, in display order.
pub fn all_links() -> Vec<&'static PageLink> {
    let mut links = Vec::new();
    for entry in MENU {
        match entry {
            MenuEntry::Page(link) => links.push(link),
            MenuEntry::Dropdown { items, .. } => {
                for item in *items {
                    if let DropdownItem::Link(link) = item {
                        links.push(link);
                    }
                }
            }
        }
    }
    links
}

/// Page identifiers the menu can highlight.
pub fn known_pages() -> Vec<&'static str> {
    all_links().into_iter().filter_map(|link| link.page).collect()
}

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip on each click of the toggle control.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed. Used for outside clicks and link follows; idempotent.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(current: &str) -> usize {
        all_links()
            .into_iter()
            .filter(|link| is_active(link.page, current))
            .count()
    }

    #[test]
    fn root_path_is_home() {
        assert_eq!(page_from_path("/"), HOME_PAGE);
        assert_eq!(page_from_path(""), HOME_PAGE);
    }

    #[test]
    fn last_segment_wins() {
        assert_eq!(page_from_path("/dashboard"), "dashboard");
        assert_eq!(page_from_path("/nested/under/debug"), "debug");
    }

    #[test]
    fn query_and_fragment_are_stripped() {
        assert_eq!(page_from_path("/reports?kind=daily"), "reports");
        assert_eq!(page_from_path("/config?tab=sensors#wiring"), "config");
        assert_eq!(page_from_path("/?utm=x"), HOME_PAGE);
    }

    #[test]
    fn each_known_page_highlights_exactly_one_link() {
        for page in known_pages() {
            assert_eq!(active_count(page), 1, "page `{page}`");
        }
    }

    #[test]
    fn unknown_page_highlights_nothing() {
        assert_eq!(active_count("totalizer"), 0);
        assert_eq!(active_count(""), 0);
    }

    #[test]
    fn selector_links_never_highlight() {
        // `/config?tab=...` routes still resolve to the `config` page; only
        // the plain configuration link may light up for them.
        let current = page_from_path("/config?tab=sensors");
        let lit: Vec<_> = all_links()
            .into_iter()
            .filter(|link| is_active(link.page, &current))
            .map(|link| link.href)
            .collect();
        assert_eq!(lit, vec!["/config"]);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MenuToggle::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut menu = MenuToggle::default();
        menu.toggle();
        menu.dismiss();
        assert!(!menu.is_open());
        menu.dismiss();
        assert!(!menu.is_open());
    }
}
