//! Data models
//!
//! Wire DTOs (`*Dto`, envelopes) mirror the backend JSON; the plain types
//! are what the storefront keeps in memory. All IDs are `i64`.

pub mod category;
pub mod menu_item;
pub mod product;
pub mod restaurant;
pub mod serde_helpers;

// Re-exports
pub use category::*;
pub use menu_item::*;
pub use product::*;
pub use restaurant::*;
