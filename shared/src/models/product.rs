//! Product Model
//!
//! `GET /api/products` returns `{ "products": [ProductDto] }`, while static
//! `menu.json` files carry a flat `[MenuItem]` array. [`ProductsPayload`]
//! classifies a parsed body into one of the two before mapping.

use super::serde_helpers;
use super::{MenuItem, slugify};
use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nested category reference on a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// Product as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::whole_number")]
    pub price: i64,
    #[serde(default, deserialize_with = "serde_helpers::option_whole_number")]
    pub discount_price: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
}

fn default_true() -> bool {
    true
}

impl ProductDto {
    /// Map into the storefront item. A non-zero discount price wins.
    pub fn into_menu_item(self) -> MenuItem {
        let price = self
            .discount_price
            .filter(|discount| *discount != 0)
            .unwrap_or(self.price);
        let category = self
            .category
            .map(|c| slugify(&c.name))
            .unwrap_or_else(|| "other".to_string());

        MenuItem {
            id: self.id,
            name: self.name,
            price,
            description: self.description,
            category,
            size: self.size,
            photo: self.photo,
            is_available: self.is_available,
            stock: self.stock,
            restaurant_id: self.restaurant_id,
            address_id: None,
        }
    }
}

/// Classified products body
#[derive(Debug, Clone)]
pub enum ProductsPayload {
    /// Backend envelope `{ "products": [...] }`
    Envelope(Vec<ProductDto>),
    /// Legacy flat array from a static file
    Legacy(Vec<MenuItem>),
}

impl ProductsPayload {
    pub fn classify(value: Value) -> Result<Self, ShapeError> {
        match value {
            Value::Object(mut map) => match map.remove("products") {
                Some(products @ Value::Array(_)) => {
                    Ok(Self::Envelope(serde_json::from_value(products)?))
                }
                _ => Err(ShapeError::Unrecognized {
                    expected: "object with a `products` array",
                }),
            },
            array @ Value::Array(_) => Ok(Self::Legacy(serde_json::from_value(array)?)),
            _ => Err(ShapeError::Unrecognized {
                expected: "products envelope or item array",
            }),
        }
    }

    pub fn into_menu_items(self) -> Vec<MenuItem> {
        match self {
            Self::Envelope(products) => products
                .into_iter()
                .map(ProductDto::into_menu_item)
                .collect(),
            Self::Legacy(items) => items,
        }
    }
}
