//! Admin dashboard configuration

pub const PRODUCTS_PATH: &str = "admin/products";
pub const ORDERS_PATH: &str = "admin/orders";
pub const DISCOUNTS_PATH: &str = "admin/discounts";

/// # Environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | CAFE_ADMIN_BASE_URL | http://localhost:8000 |
/// | REQUEST_TIMEOUT_MS | unset |
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Admin panel base URL
    pub base_url: String,
    pub timeout_ms: Option<u64>,
}

impl AdminConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: None,
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("CAFE_ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".into()),
        );
        config.timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok());
        config
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
