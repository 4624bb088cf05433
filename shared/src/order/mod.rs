//! Order submission payloads
//!
//! Orders are never stored client side: the request is built fresh from the
//! cart at submission time and posted to `POST /api/orders`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Status value the backend uses for an accepted order
pub const ORDER_STATUS_SUCCESS: &str = "success";

/// One cart entry snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    pub name: String,
    pub qty: i64,
    pub price: i64,
}

impl OrderLine {
    pub fn line_total(&self) -> i64 {
        self.qty * self.price
    }
}

/// Identity of the submitting Telegram user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub order: Vec<OrderLine>,
    #[serde(rename = "totalSum")]
    pub total_sum: i64,
    /// Selected address label
    pub address: String,
    pub restaurant_id: Option<i64>,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
    pub user: Option<OrderUser>,
}

impl OrderRequest {
    pub fn new(
        order: Vec<OrderLine>,
        address: impl Into<String>,
        restaurant_id: Option<i64>,
        user: Option<OrderUser>,
        at: DateTime<Utc>,
    ) -> Self {
        let total_sum = order.iter().map(OrderLine::line_total).sum();
        Self {
            order,
            total_sum,
            address: address.into(),
            restaurant_id,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            user,
        }
    }
}

/// Backend reply to an order submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl OrderResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(ORDER_STATUS_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_wire_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let request = OrderRequest::new(
            vec![
                OrderLine { id: 1, name: "Американо".into(), qty: 2, price: 150 },
                OrderLine { id: 2, name: "Капучино".into(), qty: 1, price: 210 },
            ],
            "You Coffee - ул. Кабардинская, 25",
            Some(1),
            None,
            at,
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["totalSum"], 510);
        assert_eq!(json["timestamp"], "2025-03-01T09:30:00.000Z");
        assert_eq!(json["restaurant_id"], 1);
        assert!(json["user"].is_null());
        assert_eq!(json["order"][0]["qty"], 2);
    }

    #[test]
    fn test_response_status() {
        let ok: OrderResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.is_success());
        let err: OrderResponse =
            serde_json::from_str(r#"{"status":"error","message":"X"}"#).unwrap();
        assert!(!err.is_success());
        assert_eq!(err.message.as_deref(), Some("X"));
        let empty: OrderResponse = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_success());
    }
}
