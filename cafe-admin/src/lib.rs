//! Cafe Admin - dashboard for the admin panel
//!
//! Fetches product, order and discount lists from the admin API and renders
//! the stats panel. Shares no state with the storefront.

pub mod config;
pub mod dashboard;
pub mod view;

pub use config::AdminConfig;
pub use dashboard::{Dashboard, RECENT_ORDERS};
pub use view::{AlertKind, DashboardView, notification_html};
