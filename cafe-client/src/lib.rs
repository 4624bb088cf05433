//! Cafe Client - HTTP client for the cafe backend
//!
//! Loads restaurants, categories and the menu (degrading to fallback data
//! when the backend is unavailable) and submits orders.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod loaders;
pub mod logger;
pub mod orders;

pub use client::CafeClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, HttpReply, NetworkHttpClient};
pub use loaders::Catalog;
pub use orders::OrderFailure;

// Re-export shared types for convenience
pub use shared::{
    Address, Category, MenuItem, OrderLine, OrderRequest, OrderResponse, OrderUser, Restaurant,
};
