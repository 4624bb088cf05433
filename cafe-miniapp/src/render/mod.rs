//! Renderers
//!
//! State in, HTML out. The storefront keeps the latest markup per region in
//! a [`Page`] and re-renders only what a mutation touched.

mod page;
pub mod regions;

pub use page::Page;
