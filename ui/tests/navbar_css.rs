//! Ensures the navbar stylesheet stays present and keeps the class tokens the
//! chrome renders.
//!
//! The stylesheet is wired up through the asset pipeline, so a truncated or
//! renamed file would only degrade styling at runtime. This fails the build
//! early instead.

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[test]
fn navbar_css_exists_and_is_not_empty() {
    assert!(
        !NAVBAR_CSS.trim().is_empty(),
        "navbar stylesheet appears to be empty"
    );
}

#[test]
fn navbar_css_contains_rendered_tokens() {
    // Class names the components emit. Keep in sync with
    // `components/navbar.rs` and `components/status_indicator.rs`.
    let required = [
        ".navbar",
        ".navbar__backdrop",
        ".navbar__link--active",
        ".navbar__dropdown",
        ".navbar__divider",
        ".navbar__toggle--open",
        ".navbar__links--open",
        ".status-indicator__dot--online",
        ".status-indicator__dot--offline",
        ".status-indicator__dot--unknown",
    ];
    for token in required {
        assert!(
            NAVBAR_CSS.contains(token),
            "expected token `{token}` missing from navbar stylesheet"
        );
    }
}
