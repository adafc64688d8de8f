//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use client::net::types::ClientConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}' (expected 1-65535)")]
    InvalidPort(String),
    #[error("STOREFRONT_API_URL is set but empty")]
    EmptyApiUrl,
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Business API base URL handed to the browser, without a trailing slash.
    pub api_base_url: String,
    /// Overrides the Leptos site root when serving `/pkg`.
    pub asset_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STOREFRONT_API_URL`: default `/api`
    /// - `STOREFRONT_ASSET_DIR`: default is the Leptos site root
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            api_base_url: parse_api_url(std::env::var("STOREFRONT_API_URL").ok().as_deref())?,
            asset_dir: parse_asset_dir(std::env::var("STOREFRONT_ASSET_DIR").ok().as_deref()),
        })
    }

    /// Runtime configuration published to the browser.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig { api_base_url: self.api_base_url.clone() }
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_URL.to_owned());
    };
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::EmptyApiUrl);
    }
    Ok(url.to_owned())
}

fn parse_asset_dir(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(PathBuf::from)
}
