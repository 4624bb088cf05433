//! Client configuration

use crate::{ClientError, ClientResult, NetworkHttpClient};
use reqwest::Url;

pub const RESTAURANTS_PATH: &str = "api/restaurants";
pub const CATEGORIES_PATH: &str = "api/categories";
pub const PRODUCTS_PATH: &str = "api/products";
pub const ORDERS_PATH: &str = "api/orders";

/// Client configuration for connecting to the cafe backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CAFE_API_BASE_URL | http://localhost:8000 | Backend base URL |
/// | CAFE_PAGE_URL | http://localhost:8080/ | Mini app page, base for static menu paths |
/// | CAFE_MENU_PATHS | ./menu.json,/menu.json | Static menu fallbacks, in order |
/// | REQUEST_TIMEOUT_MS | unset | Per-request timeout; none when unset |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// URL the mini app page is served from
    pub page_url: String,

    /// Static menu files tried after the products API, relative to `page_url`
    pub menu_paths: Vec<String>,

    /// Request timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_url: "http://localhost:8080/".to_string(),
            menu_paths: vec!["./menu.json".to_string(), "/menu.json".to_string()],
            timeout_ms: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("CAFE_API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".into()),
        );
        if let Ok(page_url) = std::env::var("CAFE_PAGE_URL") {
            config.page_url = page_url;
        }
        if let Ok(paths) = std::env::var("CAFE_MENU_PATHS") {
            config.menu_paths = paths
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
        }
        config.timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok());
        config
    }

    /// Set the page URL
    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = page_url.into();
        self
    }

    /// Replace the static menu paths
    pub fn with_menu_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.menu_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, millis: u64) -> Self {
        self.timeout_ms = Some(millis);
        self
    }

    /// Absolute URL of a backend API path
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Menu candidates in priority order: products API, then static files
    pub fn menu_sources(&self) -> ClientResult<Vec<String>> {
        let page = Url::parse(&self.page_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.page_url, e)))?;

        let mut sources = Vec::with_capacity(self.menu_paths.len() + 1);
        sources.push(self.api_url(PRODUCTS_PATH));
        for path in &self.menu_paths {
            let url = page
                .join(path)
                .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))?;
            sources.push(url.to_string());
        }
        Ok(sources)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self.timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_cleanly() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(
            config.api_url(PRODUCTS_PATH),
            "http://localhost:8000/api/products"
        );
        assert_eq!(
            config.api_url("/api/orders"),
            "http://localhost:8000/api/orders"
        );
    }

    #[test]
    fn test_menu_sources_resolve_against_page() {
        let config = ClientConfig::new("http://api.local")
            .with_page_url("http://cdn.local/app/index.html");
        let sources = config.menu_sources().unwrap();
        assert_eq!(
            sources,
            vec![
                "http://api.local/api/products".to_string(),
                "http://cdn.local/app/menu.json".to_string(),
                "http://cdn.local/menu.json".to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_page_url() {
        let config = ClientConfig::new("http://api.local").with_page_url("not a url");
        assert!(matches!(
            config.menu_sources(),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
