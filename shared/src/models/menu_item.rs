//! Menu Item Model

use super::serde_helpers;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Derive a filter slug from a display name: lowercase, whitespace runs → `_`.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "_")
        .into_owned()
}

/// Menu item entity
///
/// Also the legacy static `menu.json` format, which is a flat array of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Price in whole roubles (discount already applied)
    #[serde(deserialize_with = "serde_helpers::whole_number")]
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
    /// Category slug
    #[serde(default = "default_category")]
    pub category: String,
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
    /// Address binding used by static menus predating restaurants
    #[serde(default, rename = "addressId", skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
}

fn default_category() -> String {
    "other".to_string()
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    pub fn new(id: i64, name: impl Into<String>, price: i64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: None,
            category: category.into(),
            size: None,
            photo: None,
            is_available: true,
            stock: None,
            restaurant_id: None,
            address_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_address(mut self, address_id: impl Into<String>) -> Self {
        self.address_id = Some(address_id.into());
        self
    }

    pub fn with_restaurant(mut self, restaurant_id: i64) -> Self {
        self.restaurant_id = Some(restaurant_id);
        self
    }

    /// Whether the "add" button should be enabled
    pub fn is_orderable(&self) -> bool {
        self.is_available && self.stock.is_none_or(|stock| stock > 0)
    }
}
