//! Cafe Mini App - Telegram storefront
//!
//! Renders the menu, keeps the cart and submits orders. Works inside the
//! Telegram WebApp host and, without it, in demo mode.

pub mod cart;
pub mod filter;
pub mod host;
pub mod launch;
pub mod notify;
pub mod render;
pub mod state;
pub mod storefront;
pub mod theme;

pub use cart::{Cart, CartEntry, CartSummary};
pub use host::{Host, HostCommand, ImpactStyle, NoHost, WebAppHost};
pub use launch::{LaunchError, LaunchParams};
pub use notify::{Notification, NotificationKind};
pub use render::Page;
pub use state::{CafeInfo, ClientState, LoadTicket};
pub use storefront::{Storefront, SubmitOutcome};
pub use theme::{ColorScheme, ThemeParams};
