use thiserror::Error;
use url::Url;

use crate::constants::{DEFAULT_BODY_PREVIEW_CHARS, PLACEHOLDER_IMAGE_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Remote API
    pub api_base_url: String,
    pub api_auth_token: Option<String>,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Display
    pub body_preview_chars: usize,
    pub placeholder_image_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Remote API
            api_base_url: required_env("API_BASE_URL")?,
            api_auth_token: optional_env("API_AUTH_TOKEN"),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // Display
            body_preview_chars: parse_env_usize("BODY_PREVIEW_CHARS", DEFAULT_BODY_PREVIEW_CHARS)?,
            placeholder_image_url: env_or_default("PLACEHOLDER_IMAGE_URL", PLACEHOLDER_IMAGE_URL),
        })
    }

    /// Configuration pointing at the given API, with defaults for everything else.
    #[must_use]
    pub fn for_testing(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            api_auth_token: None,
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            body_preview_chars: DEFAULT_BODY_PREVIEW_CHARS,
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| ConfigError::InvalidValue {
            name: "API_BASE_URL".to_string(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                name: "API_BASE_URL".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.body_preview_chars == 0 {
            return Err(ConfigError::InvalidValue {
                name: "BODY_PREVIEW_CHARS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.placeholder_image_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "PLACEHOLDER_IMAGE_URL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
