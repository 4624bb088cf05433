//! Telegram WebApp init data
//!
//! The host passes a query string (`query_id=...&user=%7B...%7D&auth_date=...&hash=...`).
//! Telegram signs it with HMAC-SHA256:
//! - secret key = HMAC_SHA256(key = "WebAppData", msg = bot token)
//! - hash = hex(HMAC_SHA256(key = secret, msg = data_check_string))
//!
//! where `data_check_string` is every `key=value` pair except `hash`,
//! sorted by key and joined with `\n`.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use shared::OrderUser;
use std::collections::BTreeMap;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Init data older than this is rejected
pub const MAX_AGE_SECS: i64 = 86_400;

#[derive(Debug, Error)]
pub enum InitDataError {
    #[error("Missing hash parameter")]
    MissingHash,

    #[error("Invalid hash - data may be tampered")]
    BadSignature,

    #[error("Init data is too old ({age_secs} seconds)")]
    Expired { age_secs: i64 },

    #[error("Failed to parse user JSON: {0}")]
    InvalidUser(#[from] serde_json::Error),

    #[error("Invalid HMAC key")]
    InvalidKey,
}

/// Telegram user as embedded in init data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl WebAppUser {
    pub fn to_order_user(&self) -> OrderUser {
        OrderUser {
            id: self.id,
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            username: self.username.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InitData {
    pub query_id: Option<String>,
    pub user: Option<WebAppUser>,
    pub auth_date: Option<i64>,
    pub hash: Option<String>,
    /// All decoded pairs, sorted by key
    params: BTreeMap<String, String>,
}

impl InitData {
    /// Parse without checking the signature
    pub fn parse(raw: &str) -> Result<Self, InitDataError> {
        let params: BTreeMap<String, String> = raw
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=')?;
                let decoded = urlencoding::decode(value).ok()?;
                Some((key.to_string(), decoded.into_owned()))
            })
            .collect();

        let user = params
            .get("user")
            .map(|json| serde_json::from_str::<WebAppUser>(json))
            .transpose()?;

        Ok(Self {
            query_id: params.get("query_id").cloned(),
            user,
            auth_date: params.get("auth_date").and_then(|v| v.parse().ok()),
            hash: params.get("hash").cloned(),
            params,
        })
    }

    /// Check the signature against `bot_token` and the age against `now`
    pub fn validate(&self, bot_token: &str, now: DateTime<Utc>) -> Result<(), InitDataError> {
        let received = self.hash.as_deref().ok_or(InitDataError::MissingHash)?;
        let expected = hex::decode(received).map_err(|_| InitDataError::BadSignature)?;

        let mut mac = HmacSha256::new_from_slice(&secret_key(bot_token)?)
            .map_err(|_| InitDataError::InvalidKey)?;
        mac.update(self.data_check_string().as_bytes());
        mac.verify_slice(&expected)
            .map_err(|_| InitDataError::BadSignature)?;

        if let Some(auth_date) = self.auth_date {
            let age_secs = now.timestamp() - auth_date;
            if age_secs > MAX_AGE_SECS {
                return Err(InitDataError::Expired { age_secs });
            }
        }
        Ok(())
    }

    fn data_check_string(&self) -> String {
        self.params
            .iter()
            .filter(|(key, _)| key.as_str() != "hash")
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn secret_key(bot_token: &str) -> Result<Vec<u8>, InitDataError> {
    let mut mac =
        HmacSha256::new_from_slice(b"WebAppData").map_err(|_| InitDataError::InvalidKey)?;
    mac.update(bot_token.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
