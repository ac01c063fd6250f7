//! Server configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CACHE_TTL_SECS: u64 = 30;

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Settings for the HTTP server and its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind
    pub addr: SocketAddr,

    /// Directory for the file-backed plan store; in-memory when unset
    pub store_dir: Option<PathBuf>,

    /// Directory of `{station}.json` arrival boards; built-in sample when unset
    pub mock_arrivals_dir: Option<PathBuf>,

    /// TTL of cached arrival boards
    pub arrivals_cache_ttl: Duration,

    /// Directory of a built front end to serve at `/`
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = parse(&lookup, "HOST")?.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port: u16 = parse(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let ttl_secs: u64 =
            parse(&lookup, "ARRIVALS_CACHE_TTL_SECS")?.unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let path = |var: &str| lookup(var).filter(|v| !v.is_empty()).map(PathBuf::from);

        Ok(Self {
            addr: SocketAddr::new(host, port),
            store_dir: path("STORE_DIR"),
            mock_arrivals_dir: path("MOCK_ARRIVALS_DIR"),
            arrivals_cache_ttl: Duration::from_secs(ttl_secs),
            static_dir: path("STATIC_DIR"),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            store_dir: None,
            mock_arrivals_dir: None,
            arrivals_cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            static_dir: None,
        }
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
