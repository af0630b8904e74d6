//! Process configuration from environment variables.

use crate::error::ConfigError;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/warehouse";
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 86_400;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Upper bound on each request's store work; becomes the request deadline.
    pub request_timeout: Duration,
    /// Create the tables on startup when they do not exist.
    pub bootstrap_schema: bool,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let max_connections: u32 = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(invalid("DATABASE_MAX_CONNECTIONS", "0"));
        }
        let timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&timeout_secs) {
            return Err(invalid("REQUEST_TIMEOUT_SECS", &timeout_secs.to_string()));
        }
        let bootstrap_schema = match lookup("BOOTSTRAP_SCHEMA") {
            None => false,
            Some(v) => parse_flag(&v).ok_or_else(|| invalid("BOOTSTRAP_SCHEMA", &v))?,
        };
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?;

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            request_timeout: Duration::from_secs(timeout_secs),
            bootstrap_schema,
            body_limit_bytes,
        })
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| invalid(key, &raw)),
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.database_url, "postgres://localhost/warehouse");
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert!(!cfg.bootstrap_schema);
        assert_eq!(cfg.body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn values_are_read() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://db/wh"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("BOOTSTRAP_SCHEMA", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db/wh");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.request_timeout, Duration::from_secs(3));
        assert!(cfg.bootstrap_schema);
    }

    #[test]
    fn bad_values_name_the_key() {
        match config(&[("REQUEST_TIMEOUT_SECS", "soon")]) {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "REQUEST_TIMEOUT_SECS");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(config(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config(&[("BOOTSTRAP_SCHEMA", "maybe")]).is_err());
    }

    #[test]
    fn request_timeout_must_be_within_range() {
        assert!(matches!(
            config(&[("REQUEST_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid { key: "REQUEST_TIMEOUT_SECS", .. })
        ));
        let huge = u64::MAX.to_string();
        assert!(matches!(
            config(&[("REQUEST_TIMEOUT_SECS", huge.as_str())]),
            Err(ConfigError::Invalid { key: "REQUEST_TIMEOUT_SECS", .. })
        ));
        let cfg = config(&[("REQUEST_TIMEOUT_SECS", "86400")]).unwrap();
        assert_eq!(cfg.request_timeout, Duration::from_secs(86_400));
    }
}
