//! Process configuration, read from the environment once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use shiprate_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "SHIPRATE_BIND_ADDR";
pub const COUNTRIES_CSV_VAR: &str = "SHIPRATE_COUNTRIES_CSV";
pub const LOG_FORMAT_VAR: &str = "SHIPRATE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_COUNTRIES_CSV: &str = "countries.csv";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHIPRATE_BIND_ADDR={value} is not a socket address")]
    InvalidBindAddr { value: String },

    #[error("SHIPRATE_LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub countries_csv: PathBuf,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_addr.clone() })?;

        let countries_csv = lookup(COUNTRIES_CSV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTRIES_CSV));

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(v) => v.parse().map_err(ConfigError::InvalidLogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            countries_csv,
            log_format,
        })
    }
}
