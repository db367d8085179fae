//! Shared UI crate for Mirante. The dashboard chrome and its core logic live
//! here; the `web` binary owns the route table.

pub mod core;
pub mod views;

pub mod components {
    // Navigation bar (components/navbar.rs)
    pub mod navbar;
    pub use navbar::AppNavbar;

    // Backend connectivity indicator and its poll loop
    pub mod status_indicator;
    pub use status_indicator::{use_backend_status, StatusIndicator};
}
