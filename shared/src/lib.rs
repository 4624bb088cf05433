//! Shared types for the cafe storefront
//!
//! Domain models and wire DTOs used by the HTTP client, the Telegram
//! mini app and the admin dashboard.

pub mod admin;
pub mod error;
pub mod html;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use error::ShapeError;
pub use html::HtmlBuilder;
pub use models::{
    Address, Category, CategoryDto, MenuItem, ProductDto, ProductsPayload, Restaurant, slugify,
};
pub use order::{OrderLine, OrderRequest, OrderResponse, OrderUser};
pub use util::format_price;
