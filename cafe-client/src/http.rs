//! HTTP client for network-based API calls

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// A fully read HTTP response
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body regardless of status
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parse the body, treating a non-2xx status as an error
    pub fn into_json<T: DeserializeOwned>(self) -> ClientResult<T> {
        if !self.is_success() {
            return Err(ClientError::Status {
                status: self.status.as_u16(),
                body: self.body,
            });
        }
        self.json()
    }
}

/// HTTP client trait
///
/// Takes absolute URLs: menu sources live on different hosts than the API.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET without caching, returning the reply whatever its status
    async fn get_raw(&self, url: &str) -> ClientResult<HttpReply>;

    /// POST a JSON body, returning the reply whatever its status
    async fn post_raw<B: Serialize + Sync>(&self, url: &str, body: &B) -> ClientResult<HttpReply>;

    /// GET and decode a 2xx JSON body
    async fn get<T: DeserializeOwned + Send>(&self, url: &str) -> ClientResult<T> {
        self.get_raw(url).await?.into_json()
    }
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
}

impl NetworkHttpClient {
    /// `timeout_ms = None` leaves requests unbounded
    pub fn new(timeout_ms: Option<u64>) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(ms));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn read_reply(response: reqwest::Response) -> ClientResult<HttpReply> {
        let status = response.status();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get_raw(&self, url: &str) -> ClientResult<HttpReply> {
        let response = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;
        let reply = Self::read_reply(response).await?;
        debug!(url, status = reply.status.as_u16(), "GET");
        Ok(reply)
    }

    async fn post_raw<B: Serialize + Sync>(&self, url: &str, body: &B) -> ClientResult<HttpReply> {
        let response = self.client.post(url).json(body).send().await?;
        let reply = Self::read_reply(response).await?;
        debug!(url, status = reply.status.as_u16(), "POST");
        Ok(reply)
    }
}
