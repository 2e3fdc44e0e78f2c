//! Server configuration read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 8081;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Allow any origin, method and header so a separately served front end can call in
    pub cors_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_any: true,
        }
    }
}

impl ServerConfig {
    /// Read `UPCOMING_HOST`, `UPCOMING_PORT` and `UPCOMING_CORS_ANY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("UPCOMING_HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "UPCOMING_HOST",
                value: raw,
            })?,
            None => defaults.host,
        };

        let port = match lookup("UPCOMING_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "UPCOMING_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let cors_any = lookup("UPCOMING_CORS_ANY")
            .map(|raw| parse_flag(&raw, defaults.cors_any))
            .unwrap_or(defaults.cors_any);

        Ok(Self {
            host,
            port,
            cors_any,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
