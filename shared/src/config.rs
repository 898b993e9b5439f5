use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_API_BASE_URL: &str = "https://voice-assistant-ai-adnm.onrender.com";
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Visual variant of the dashboard. Both variants render the same components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Black background with orange accents
    #[default]
    Ember,
    /// Light background with indigo accents
    Daylight,
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ember" | "dark" => Ok(ThemeName::Ember),
            "daylight" | "light" => Ok(ThemeName::Daylight),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Ember => write!(f, "ember"),
            ThemeName::Daylight => write!(f, "daylight"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the backend, without a trailing slash
    pub api_base_url: String,
    /// Users requested per page
    pub page_size: u64,
    pub theme: ThemeName,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            theme: ThemeName::default(),
        }
    }
}

impl DashboardConfig {
    /// Builds a config from optional raw overrides. Invalid values are
    /// logged and replaced by the defaults.
    pub fn from_values(
        api_base_url: Option<&str>,
        page_size: Option<&str>,
        theme: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = page_size {
            match raw.trim().parse::<u64>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => warn!("Ignoring invalid page size '{}', using {}", raw, DEFAULT_PAGE_SIZE),
            }
        }

        if let Some(raw) = theme {
            match raw.parse::<ThemeName>() {
                Ok(theme) => config.theme = theme,
                Err(e) => warn!("Ignoring theme override: {}", e),
            }
        }

        config
    }

    /// Absolute URL for an API path beginning with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
