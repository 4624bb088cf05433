//! Restaurant & Address Models

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RESTAURANT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"restaurant_(\d+)").expect("static regex"));

const MAP_SEARCH_URL: &str = "https://yandex.ru/maps/?text=";

/// Restaurant as returned by `GET /api/restaurants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// `{ "restaurants": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantsEnvelope {
    #[serde(default)]
    pub restaurants: Option<Vec<Restaurant>>,
}

/// Pickup address shown in the selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub label: String,
    /// Map link (`#` when unknown)
    pub map: String,
}

impl Address {
    pub fn new(id: impl Into<String>, label: impl Into<String>, map: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            map: map.into(),
        }
    }

    /// Address entry for a backend restaurant, id encoded as `restaurant_<id>`
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        Self {
            id: format!("restaurant_{}", restaurant.id),
            label: format!("{} - {}", restaurant.name, restaurant.address),
            map: format!(
                "{}{}",
                MAP_SEARCH_URL,
                urlencoding::encode(&restaurant.address)
            ),
        }
    }

    /// Shown when no address is configured at all
    pub fn placeholder() -> Self {
        Self::new("ax", "Адрес не задан", "#")
    }

    /// Restaurant id encoded in the address id, if any.
    ///
    /// Zero is treated as "no restaurant".
    pub fn restaurant_id(&self) -> Option<i64> {
        RESTAURANT_ID
            .captures(&self.id)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .filter(|id| *id != 0)
    }
}
