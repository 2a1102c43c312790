use std::{env, net::SocketAddr, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SOURCE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub source_url: String,
    pub source_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT);
        let timeout_secs = parse_or_default(
            &lookup,
            "SESSION_SOURCE_TIMEOUT_SECS",
            DEFAULT_SOURCE_TIMEOUT_SECS,
        );

        let source_url = lookup("SESSION_SOURCE_URL")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());

        Self {
            port,
            source_url,
            source_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={value:?}, using {default}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let settings = settings(&[]);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.source_url, "http://127.0.0.1:8000");
        assert_eq!(settings.source_timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let settings = settings(&[
            ("PORT", "9000"),
            ("SESSION_SOURCE_URL", "https://pool.example.com/"),
            ("SESSION_SOURCE_TIMEOUT_SECS", "3"),
        ]);
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.source_url, "https://pool.example.com");
        assert_eq!(settings.source_timeout, Duration::from_secs(3));
        assert_eq!(settings.addr().port(), 9000);
    }

    #[test]
    fn invalid_values_fall_back() {
        let settings = settings(&[("PORT", "http"), ("SESSION_SOURCE_URL", "  ")]);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.source_url, "http://127.0.0.1:8000");
    }
}
