use serde::{Deserialize, Serialize};

use crate::models::Theme;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub auth: AuthConfig,
    pub default_theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            auth: AuthConfig::default(),
            default_theme: Theme::System,
        }
    }
}

/// Token policy used by the session guard at start-up
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// When false every stored credential (even none) counts as valid
    pub require_token: bool,
    /// Token handed out by the one-shot refresh, if any
    pub refresh_token: Option<String>,
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("REQUIRE_TOKEN"),
            option_env!("REFRESH_TOKEN"),
            option_env!("DEFAULT_THEME"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        require_token: Option<&str>,
        refresh_token: Option<&str>,
        default_theme: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            environment: environment
                .unwrap_or("development").to_string(),
            enable_logging: enable_logging
                .unwrap_or("true").parse().unwrap_or(true),
            auth: AuthConfig {
                require_token: require_token
                    .unwrap_or("false").parse().unwrap_or(false),
                refresh_token: refresh_token
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string),
            },
            default_theme: default_theme
                .and_then(Theme::from_key)
                .unwrap_or(defaults.default_theme),
        }
    }

    /// Base URL of the image service, without trailing slash
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_values(None, None, None, None, None, None);
        assert_eq!(config.api_base_url(), "http://127.0.0.1:5000");
        assert!(config.is_logging_enabled());
        assert!(!config.is_production());
        assert!(!config.auth.require_token);
        assert_eq!(config.auth.refresh_token, None);
        assert_eq!(config.default_theme, Theme::System);
    }

    #[test]
    fn test_base_url_loses_trailing_slash() {
        let config = AppConfig::from_values(Some("https://img.example.com/api/ "), None, None, None, None, None);
        assert_eq!(config.api_base_url(), "https://img.example.com/api");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(
            Some(""),
            Some("production"),
            Some("yes"),
            Some("maybe"),
            Some("   "),
            Some("sepia"),
        );
        assert_eq!(config.api_base_url(), "http://127.0.0.1:5000");
        assert!(config.is_production());
        assert!(config.is_logging_enabled());
        assert!(!config.auth.require_token);
        assert_eq!(config.auth.refresh_token, None);
        assert_eq!(config.default_theme, Theme::System);
    }

    #[test]
    fn test_auth_values_are_parsed() {
        let config = AppConfig::from_values(None, None, Some("false"), Some("true"), Some("tok-123"), Some("dark"));
        assert!(!config.is_logging_enabled());
        assert!(config.auth.require_token);
        assert_eq!(config.auth.refresh_token.as_deref(), Some("tok-123"));
        assert_eq!(config.default_theme, Theme::Dark);
    }
}
