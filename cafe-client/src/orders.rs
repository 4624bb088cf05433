//! Order submission
//!
//! One POST, no retry. Failures are classified into the few categories the
//! storefront shows to the customer.

use crate::config::ORDERS_PATH;
use crate::{CafeClient, ClientError, HttpClient};
use shared::{OrderRequest, OrderResponse};
use thiserror::Error;
use tracing::{error, info};

const UNKNOWN_API_ERROR: &str = "Неизвестная ошибка";

/// Why an order did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderFailure {
    /// Transport could not complete
    #[error("network error: {0}")]
    Network(String),
    /// Cross-origin rejection reported by the server or the transport
    #[error("CORS error: {0}")]
    Cors(String),
    /// Backend answered but did not accept the order
    #[error("order rejected: {message}")]
    Api { message: String },
    /// Anything else (malformed reply, bad configuration)
    #[error("order failed: {message}")]
    Generic { message: String },
}

impl OrderFailure {
    fn from_error(err: ClientError) -> Self {
        let text = err.to_string();
        if text.contains("CORS") {
            Self::Cors(text)
        } else if err.is_transport() {
            Self::Network(text)
        } else {
            Self::Generic { message: text }
        }
    }

    fn rejected(message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
        if message.contains("CORS") {
            Self::Cors(message)
        } else {
            Self::Api { message }
        }
    }

    /// Text shown to the customer
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Ошибка сети. Проверьте подключение к интернету.".to_string(),
            Self::Cors(_) => "Ошибка CORS. Проверьте настройки сервера.".to_string(),
            Self::Api { message } => format!("Ошибка API: {message}"),
            Self::Generic { message } if message.is_empty() => {
                "Ошибка отправки заказа".to_string()
            }
            Self::Generic { message } => message.clone(),
        }
    }
}

impl<C: HttpClient> CafeClient<C> {
    /// Post an order. Accepted only on a 2xx reply whose `status` is `success`.
    pub async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResponse, OrderFailure> {
        let url = self.config.api_url(ORDERS_PATH);
        info!(
            lines = request.order.len(),
            total = request.total_sum,
            restaurant_id = ?request.restaurant_id,
            "Submitting order"
        );

        let reply = self
            .http
            .post_raw(&url, request)
            .await
            .map_err(OrderFailure::from_error)
            .inspect_err(|e| error!(error = %e, "Order submission failed"))?;

        let response: OrderResponse = reply
            .json()
            .map_err(OrderFailure::from_error)
            .inspect_err(|e| error!(error = %e, "Order reply unreadable"))?;

        if reply.is_success() && response.is_success() {
            info!("Order accepted");
            return Ok(response);
        }

        let failure = OrderFailure::rejected(response.message);
        error!(status = reply.status.as_u16(), error = %failure, "Order rejected");
        Err(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            OrderFailure::Api { message: "X".into() }.user_message(),
            "Ошибка API: X"
        );
        assert!(OrderFailure::Network("refused".into())
            .user_message()
            .starts_with("Ошибка сети"));
        assert_eq!(
            OrderFailure::Generic { message: String::new() }.user_message(),
            "Ошибка отправки заказа"
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert_eq!(
            OrderFailure::rejected(None),
            OrderFailure::Api { message: UNKNOWN_API_ERROR.into() }
        );
        assert!(matches!(
            OrderFailure::rejected(Some("blocked by CORS policy".into())),
            OrderFailure::Cors(_)
        ));
    }

    #[test]
    fn test_shape_errors_are_generic() {
        let err = serde_json::from_str::<OrderResponse>("<html>").unwrap_err();
        assert!(matches!(
            OrderFailure::from_error(ClientError::from(err)),
            OrderFailure::Generic { .. }
        ));
    }
}
