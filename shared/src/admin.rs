//! Admin panel list DTOs
//!
//! The dashboard only counts products and discounts, so those stay as raw
//! JSON values. Orders are rendered, but the backend is loose about field
//! types (`user` may be a name or null, `total` an int or a decimal string).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /admin/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminProducts {
    #[serde(default)]
    pub products: Vec<Value>,
}

/// `GET /admin/orders`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminOrders {
    #[serde(default)]
    pub orders: Vec<AdminOrder>,
}

/// `GET /admin/discounts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminDiscounts {
    #[serde(default)]
    pub discounts: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminOrder {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub user: Value,
    #[serde(default)]
    pub total: Value,
    #[serde(default)]
    pub status: Value,
}

/// Text for a loosely typed field: strings verbatim, null as empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
