//! Host theme

use serde::{Deserialize, Serialize};

/// Subset of Telegram `themeParams` the storefront maps onto CSS variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub hint_color: Option<String>,
    #[serde(default)]
    pub button_color: Option<String>,
    #[serde(default)]
    pub secondary_bg_color: Option<String>,
    #[serde(default)]
    pub section_separator_color: Option<String>,
}

impl ThemeParams {
    /// `(css variable, value)` for every color the host provided.
    ///
    /// Values that could break out of a declaration are dropped.
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        [
            ("--bg", &self.bg_color),
            ("--text", &self.text_color),
            ("--muted", &self.hint_color),
            ("--primary", &self.button_color),
            ("--card", &self.secondary_bg_color),
            ("--border", &self.section_separator_color),
        ]
        .into_iter()
        .filter_map(|(var, value)| {
            value
                .as_deref()
                .filter(|v| is_safe_css_value(v))
                .map(|v| (var, v))
        })
        .collect()
    }
}

fn is_safe_css_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | ' ' | '%'))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn indicator_color(self) -> &'static str {
        match self {
            Self::Dark => "#6ea8fe",
            Self::Light => "#2b7cff",
        }
    }
}
