//! Backend connection settings for the identity login form.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of the customer-service backend when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// User agent sent with every identity lookup
pub const DEFAULT_USER_AGENT: &str = "identity-login-portal/1.0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Configuration error: {field} must not be empty")]
    EmptyField { field: String },
}

/// Settings for the identity lookup client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend; `/customer/{id}` and `/user/{id}` are resolved against it
    pub base_url: String,

    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at a specific backend
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Configuration baked in at build time.
    ///
    /// `IDENTITY_API_BASE_URL` overrides the default backend address.
    pub fn from_build_env() -> Self {
        match option_env!("IDENTITY_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Parse and check the base URL. Identifiers are appended as path segments,
    /// so the URL must be hierarchical (http/https).
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptyField {
                field: "base_url".to_string(),
            });
        }

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
            value: raw.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: raw.to_string(),
                reason: "expected an http or https URL".to_string(),
            });
        }

        Ok(url)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_base_url()?;
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "user_agent".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_hierarchical_urls() {
        let config = ClientConfig::with_base_url("mailto:support@example.com");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));

        let config = ClientConfig::with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_fields() {
        let config = ClientConfig::with_base_url("   ");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyField {
                field: "base_url".to_string()
            })
        );

        let config = ClientConfig {
            user_agent: String::new(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyField {
                field: "user_agent".to_string()
            })
        );
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"base_url": "https://support.example.com/api/", "user_agent": "kiosk/2.0"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://support.example.com/api/");
        assert_eq!(config.user_agent, "kiosk/2.0");
        assert!(config.validate().is_ok());
    }
}
