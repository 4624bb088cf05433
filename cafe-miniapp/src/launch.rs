//! Launch parameters
//!
//! The webview bridge hands the mini app what Telegram put on
//! `window.Telegram.WebApp` through the environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | TELEGRAM_INIT_DATA | Raw init data query string; unset means demo mode |
//! | TELEGRAM_BOT_TOKEN | When set, init data must carry a valid signature |
//! | TELEGRAM_THEME_PARAMS | `themeParams` JSON |
//! | TELEGRAM_COLOR_SCHEME | `light` or `dark` |

use crate::host::{InitData, InitDataError, WebAppHost};
use crate::theme::{ColorScheme, ThemeParams};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Invalid init data: {0}")]
    InitData(#[from] InitDataError),

    #[error("Invalid theme params: {0}")]
    Theme(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct LaunchParams {
    pub init_data: Option<String>,
    pub bot_token: Option<String>,
    pub theme_params: Option<String>,
    pub color_scheme: Option<String>,
}

impl LaunchParams {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            init_data: var("TELEGRAM_INIT_DATA"),
            bot_token: var("TELEGRAM_BOT_TOKEN"),
            theme_params: var("TELEGRAM_THEME_PARAMS"),
            color_scheme: var("TELEGRAM_COLOR_SCHEME"),
        }
    }

    /// Build the Telegram host, `None` when not launched from Telegram
    pub fn into_host(self, now: DateTime<Utc>) -> Result<Option<WebAppHost>, LaunchError> {
        let Some(raw) = self.init_data else {
            return Ok(None);
        };

        let init_data = InitData::parse(&raw)?;
        match self.bot_token.as_deref() {
            Some(token) => {
                init_data.validate(token, now)?;
                info!("Init data signature verified");
            }
            None => warn!("TELEGRAM_BOT_TOKEN not set, init data is not verified"),
        }

        let theme = self
            .theme_params
            .as_deref()
            .map(serde_json::from_str::<ThemeParams>)
            .transpose()
            .map_err(LaunchError::Theme)?
            .unwrap_or_default();
        let scheme = self
            .color_scheme
            .as_deref()
            .map(ColorScheme::parse)
            .unwrap_or_default();

        Ok(Some(WebAppHost::new(init_data, theme, scheme)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Host;

    #[test]
    fn test_no_init_data_is_demo() {
        let host = LaunchParams::default().into_host(Utc::now()).unwrap();
        assert!(host.is_none());
    }

    #[test]
    fn test_unverified_host() {
        let params = LaunchParams {
            init_data: Some("user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Ann%22%7D&auth_date=1".into()),
            theme_params: Some(r##"{"bg_color":"#ffffff","button_color":"#2481cc"}"##.into()),
            color_scheme: Some("dark".into()),
            ..Default::default()
        };
        let host = params.into_host(Utc::now()).unwrap().unwrap();
        assert!(host.is_present());
        assert_eq!(host.user().map(|u| u.id), Some(42));
        assert_eq!(host.color_scheme(), ColorScheme::Dark);
        assert_eq!(
            host.theme().and_then(|t| t.button_color.as_deref()),
            Some("#2481cc")
        );
    }

    #[test]
    fn test_token_requires_signature() {
        let params = LaunchParams {
            init_data: Some("user=%7B%22id%22%3A42%7D&auth_date=1&hash=00".into()),
            bot_token: Some("123:ABC".into()),
            ..Default::default()
        };
        assert!(matches!(
            params.into_host(Utc::now()),
            Err(LaunchError::InitData(InitDataError::BadSignature))
        ));
    }

    #[test]
    fn test_bad_theme_json() {
        let params = LaunchParams {
            init_data: Some("auth_date=1".into()),
            theme_params: Some("not json".into()),
            ..Default::default()
        };
        assert!(matches!(
            params.into_host(Utc::now()),
            Err(LaunchError::Theme(_))
        ));
    }
}
