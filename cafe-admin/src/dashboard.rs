//! Dashboard data
//!
//! The three lists are fetched independently. A failed fetch only blanks
//! its own region; nothing is retried.

use crate::config::{AdminConfig, DISCOUNTS_PATH, ORDERS_PATH, PRODUCTS_PATH};
use cafe_client::{ClientResult, HttpClient};
use shared::admin::{AdminDiscounts, AdminOrder, AdminOrders, AdminProducts};
use tracing::{info, warn};

/// Orders listed under "recent"
pub const RECENT_ORDERS: usize = 5;

/// One region's data, or the error text that replaced it
pub type Section<T> = Result<T, String>;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub products: Section<usize>,
    pub orders: Section<Vec<AdminOrder>>,
    pub discounts: Section<usize>,
}

impl Dashboard {
    pub async fn load<C: HttpClient>(http: &C, config: &AdminConfig) -> Self {
        let products_url = config.url(PRODUCTS_PATH);
        let orders_url = config.url(ORDERS_PATH);
        let discounts_url = config.url(DISCOUNTS_PATH);
        let (products, orders, discounts) = tokio::join!(
            http.get::<AdminProducts>(&products_url),
            http.get::<AdminOrders>(&orders_url),
            http.get::<AdminDiscounts>(&discounts_url),
        );

        let dashboard = Self {
            products: section("products", products.map(|p| p.products.len())),
            orders: section("orders", orders.map(|o| o.orders)),
            discounts: section("discounts", discounts.map(|d| d.discounts.len())),
        };
        info!(
            products = ?dashboard.products.as_ref().ok(),
            orders = ?dashboard.order_count(),
            discounts = ?dashboard.discounts.as_ref().ok(),
            "Dashboard loaded"
        );
        dashboard
    }

    pub fn order_count(&self) -> Option<usize> {
        self.orders.as_ref().ok().map(Vec::len)
    }

    /// First orders as returned; the backend lists newest first
    pub fn recent_orders(&self) -> Section<&[AdminOrder]> {
        match &self.orders {
            Ok(orders) => Ok(&orders[..orders.len().min(RECENT_ORDERS)]),
            Err(e) => Err(e.clone()),
        }
    }
}

fn section<T>(region: &str, result: ClientResult<T>) -> Section<T> {
    result.map_err(|e| {
        warn!(region, error = %e, "Dashboard region failed to load");
        e.to_string()
    })
}
