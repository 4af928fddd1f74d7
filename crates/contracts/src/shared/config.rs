use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub notifications: NotificationsConfig,
    pub toasts: ToastConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base URL of the backend. When absent the frontend derives it from
    /// the page location and `port`.
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub poll_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToastConfig {
    pub success_ms: u32,
    pub error_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListingConfig {
    pub page_size: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration value: {0}")]
    Invalid(&'static str),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[notifications]
poll_interval_secs = 300

[toasts]
success_ms = 3000
error_ms = 5000

[listing]
page_size = 10
"#;

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded defaults, with an optional backend base URL override.
    pub fn load(base_url_override: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        if let Some(url) = base_url_override.map(str::trim).filter(|u| !u.is_empty()) {
            config.api.base_url = Some(url.trim_end_matches('/').to_string());
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.listing.page_size == 0 {
            return Err(ConfigError::Invalid("listing.page_size must be positive"));
        }
        if self.notifications.poll_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "notifications.poll_interval_secs must be positive",
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.notifications.poll_interval_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: 3000,
            },
            notifications: NotificationsConfig {
                poll_interval_secs: 300,
            },
            toasts: ToastConfig {
                success_ms: 3000,
                error_ms: 5000,
            },
            listing: ListingConfig { page_size: 10 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.poll_interval(), Duration::from_secs(5 * 60));
    }

    #[test]
    fn test_base_url_override() {
        let config = AppConfig::load(Some("https://api.contable360.com.ar/")).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://api.contable360.com.ar")
        );

        let config = AppConfig::load(Some("  ")).unwrap();
        assert_eq!(config.api.base_url, None);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let raw = DEFAULT_CONFIG.replace("page_size = 10", "page_size = 0");
        assert!(matches!(
            AppConfig::from_toml(&raw),
            Err(ConfigError::Invalid(_))
        ));
    }
}
