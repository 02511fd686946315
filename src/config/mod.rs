//! Configuration module for the site backend.
//!
//! Configuration is loaded once at startup from environment variables (and an optional
//! `.env` file) and shared with every handler through the application state.

use std::env;
use std::fmt;
use std::net::SocketAddr;

/// Default Notion REST endpoint.
pub const DEFAULT_NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// Notion API version sent with every upstream request.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Bearer token for the Notion integration
    pub notion_token: String,
    /// Database holding blog posts
    pub posts_database_id: String,
    /// Database holding visited countries
    pub countries_database_id: String,
    /// Base URL of the Notion API, without trailing slash
    pub notion_api_base: String,
    /// Value of the `Notion-Version` header
    pub notion_version: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

// The token must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("notion_token", &"<redacted>")
            .field("posts_database_id", &self.posts_database_id)
            .field("countries_database_id", &self.countries_database_id)
            .field("notion_api_base", &self.notion_api_base)
            .field("notion_version", &self.notion_version)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

/// Errors raised while reading configuration at startup.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank
    Missing(&'static str),
    /// `SITE_BIND_ADDR` is not a socket address
    InvalidBindAddr(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => {
                write!(f, "Missing required environment variable {}", name)
            }
            ConfigError::InvalidBindAddr(value) => {
                write!(f, "Invalid SITE_BIND_ADDR format: {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let notion_token = required("NOTION_TOKEN")?;
        let posts_database_id = required("NOTION_POSTS_DB_ID")?;
        let countries_database_id = required("NOTION_COUNTRIES_DB_ID")?;

        let notion_api_base = lookup("NOTION_API_BASE")
            .unwrap_or_else(|| DEFAULT_NOTION_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let notion_version =
            lookup("NOTION_VERSION").unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string());

        let raw_addr = lookup("SITE_BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let log_level = lookup("SITE_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_json = lookup("SITE_LOG_JSON")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            notion_token,
            posts_database_id,
            countries_database_id,
            notion_api_base,
            notion_version,
            bind_addr,
            log_level,
            log_json,
        })
    }
}
