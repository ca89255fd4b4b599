//! Global configuration types for Courier.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! record store layout, the pair query policy, and the HTTP listener.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::record::{Column, DEFAULT_COLUMNS};

/// Top-level configuration for Courier.
///
/// Loaded from `~/.courier/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Which record store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Csv,
    Memory,
}

/// Record store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// File name of the record log, relative to the data directory.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Header columns written on initialize. Must include `from`, `to` and `content`.
    #[serde(default = "default_columns")]
    pub columns: Vec<Column>,

    /// Bound of the single-writer append queue.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_file_name() -> String {
    "messages.csv".to_string()
}

fn default_columns() -> Vec<Column> {
    DEFAULT_COLUMNS.to_vec()
}

fn default_queue_capacity() -> usize {
    256
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            file_name: default_file_name(),
            columns: default_columns(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// How a pair query matches stored participants.
///
/// - `Symmetric`: `(from, to)` and `(to, from)` are the same pair; no match
///   yields an empty list.
/// - `Directional`: only `record.from == from && record.to == to`; no match
///   is a not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairPolicy {
    #[default]
    Symmetric,
    Directional,
}

impl fmt::Display for PairPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairPolicy::Symmetric => write!(f, "symmetric"),
            PairPolicy::Directional => write!(f, "directional"),
        }
    }
}

impl FromStr for PairPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "symmetric" => Ok(PairPolicy::Symmetric),
            "directional" => Ok(PairPolicy::Directional),
            other => Err(format!("invalid pair policy: '{other}'")),
        }
    }
}

/// Query engine settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub pair_policy: PairPolicy,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.store.backend, StoreBackend::Csv);
        assert_eq!(config.store.file_name, "messages.csv");
        assert_eq!(config.store.columns, DEFAULT_COLUMNS.to_vec());
        assert_eq!(config.store.queue_capacity, 256);
        assert_eq!(config.query.pair_policy, PairPolicy::Symmetric);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.file_name, "messages.csv");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
[store]
backend = "memory"
file_name = "log.csv"
columns = ["from", "to", "subject", "content"]
queue_capacity = 16

[query]
pair_policy = "directional"

[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.file_name, "log.csv");
        assert_eq!(
            config.store.columns,
            vec![Column::From, Column::To, Column::Subject, Column::Content]
        );
        assert_eq!(config.store.queue_capacity, 16);
        assert_eq!(config.query.pair_policy, PairPolicy::Directional);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_pair_policy_roundtrip() {
        for policy in [PairPolicy::Symmetric, PairPolicy::Directional] {
            let parsed: PairPolicy = policy.to_string().parse().unwrap();
            assert_eq!(policy, parsed);
        }
        assert!("sideways".parse::<PairPolicy>().is_err());
    }
}
