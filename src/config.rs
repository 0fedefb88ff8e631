use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://courses.db";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = parse_or(&lookup, "HOST", "IP address", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(&lookup, "PORT", "port number", DEFAULT_PORT)?;
        let max_connections =
            parse_or(&lookup, "MAX_CONNECTIONS", "connection count", DEFAULT_MAX_CONNECTIONS)?;

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.addr(), "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MAX_CONNECTIONS", "2"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().starts_with("PORT must be a valid port number"));
    }
}
