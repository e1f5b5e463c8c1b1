//! Process configuration, read from `SWEETSHOP_*` environment variables.

use std::net::SocketAddr;

use sweetshop_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "SWEETSHOP_BIND_ADDR";
pub const SEED_VAR: &str = "SWEETSHOP_SEED";
pub const LOG_FORMAT_VAR: &str = "SWEETSHOP_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Stock the default catalogue at startup.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            seed: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: BIND_ADDR_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => {
                tracing::debug!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }
        };

        let seed = match lookup(SEED_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::Invalid {
                var: SEED_VAR,
                value: raw.clone(),
                reason: "expected true/false, 1/0 or yes/no".to_string(),
            })?,
            None => defaults.seed,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|e: sweetshop_observability::ParseLogFormatError| {
                ConfigError::Invalid {
                    var: LOG_FORMAT_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.log_format,
        };

        Ok(Self {
            bind_addr,
            seed,
            log_format,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:8081"),
            (SEED_VAR, "no"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8081)));
        assert!(!cfg.seed);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = ApiConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: BIND_ADDR_VAR, .. }));

        let err = ApiConfig::from_lookup(lookup_from(&[(SEED_VAR, "maybe")])).unwrap_err();
        assert!(err.to_string().starts_with("SWEETSHOP_SEED has invalid value 'maybe'"));

        let err = ApiConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: LOG_FORMAT_VAR, .. }));
    }
}
