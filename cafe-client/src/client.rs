//! Cafe client
//!
//! Wraps an [`HttpClient`] with the backend layout from [`ClientConfig`].
//! Loaders live in `loaders.rs`, order submission in `orders.rs`.

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

#[derive(Debug, Clone)]
pub struct CafeClient<C: HttpClient = NetworkHttpClient> {
    pub(crate) http: C,
    pub(crate) config: ClientConfig,
}

impl CafeClient<NetworkHttpClient> {
    /// Build a network client from configuration
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        Ok(Self { http, config })
    }
}

impl<C: HttpClient> CafeClient<C> {
    /// Use a custom transport
    pub fn with_http(http: C, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &C {
        &self.http
    }
}
