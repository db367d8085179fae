//! Route target views. These are deliberately thin: the chrome is the point
//! of this crate, and the pages only give the menu real destinations.

mod home;
pub use home::Home;

mod dashboard;
pub use dashboard::Dashboard;

mod config;
pub use config::Config;

mod quick_edit;
pub use quick_edit::QuickEdit;

mod debug;
pub use debug::DebugPanel;

mod reports;
pub use reports::Reports;
