//! Environment-driven server configuration.

use std::env;

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://0.0.0.0";

/// Settings resolved before the server starts.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port; the server binds `0.0.0.0:<port>`.
    pub port: u16,
    /// Base URL of the external search engine.
    pub engine_url: Url,
    /// Single origin allowed for cross-origin requests.
    pub allowed_origin: String,
}

/// Configuration failures. All are fatal: the process must not start serving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `PORT` was set but does not parse as a port number.
    #[error("PORT is not a valid port number: {value}")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },
    /// `ELASTICSEARCH_URL` was not set.
    #[error("ELASTICSEARCH_URL must be set")]
    MissingEngineUrl,
    /// `ELASTICSEARCH_URL` was set but does not parse as a URL.
    #[error("ELASTICSEARCH_URL is not a valid URL: {value}")]
    InvalidEngineUrl {
        /// The rejected value.
        value: String,
    },
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` or `ELASTICSEARCH_URL` is
    /// malformed, or when `ELASTICSEARCH_URL` is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => DEFAULT_PORT,
        };

        let engine_url = match env::var("ELASTICSEARCH_URL") {
            Ok(value) => parse_engine_url(&value)?,
            Err(_) => return Err(ConfigError::MissingEngineUrl),
        };

        let allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_owned());

        Ok(Self {
            port,
            engine_url,
            allowed_origin,
        })
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidPort {
        value: value.to_owned(),
    })
}

fn parse_engine_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|_| ConfigError::InvalidEngineUrl {
        value: value.to_owned(),
    })
}
