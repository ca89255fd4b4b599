//! Global configuration loader for Courier.
//!
//! Reads `config.toml` from the data directory (`~/.courier/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::Path;

use courier_types::config::GlobalConfig;
use courier_types::record::REQUIRED_COLUMNS;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the parsed store columns lack `from`, `to` or `content`, logs a warning and
///   keeps the rest of the file but restores the default columns.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    let mut config = match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return GlobalConfig::default();
        }
    };

    let columns = &config.store.columns;
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !columns.contains(*c)) {
        tracing::warn!(
            "store.columns in {} lacks '{missing}', using default columns",
            config_path.display()
        );
        config.store.columns = GlobalConfig::default().store.columns;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_types::config::{PairPolicy, StoreBackend};
    use courier_types::record::{Column, DEFAULT_COLUMNS};
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.store.file_name, "messages.csv");
        assert_eq!(config.query.pair_policy, PairPolicy::Symmetric);
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[store]
backend = "memory"
columns = ["from", "to", "content"]

[query]
pair_policy = "directional"
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(
            config.store.columns,
            vec![Column::From, Column::To, Column::Content]
        );
        assert_eq!(config.query.pair_policy, PairPolicy::Directional);
        assert_eq!(config.server.port, 8080);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.store.file_name, "messages.csv");
        assert_eq!(config.query.pair_policy, PairPolicy::Symmetric);
    }

    #[tokio::test]
    async fn load_global_config_columns_without_content_fall_back() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[store]
columns = ["id", "from", "to", "timestamp"]
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.store.columns, DEFAULT_COLUMNS.to_vec());
    }

    #[tokio::test]
    async fn load_global_config_columns_without_participants_fall_back() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[store]
file_name = "log.csv"
columns = ["id", "content"]
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.store.file_name, "log.csv");
        assert_eq!(config.store.columns, DEFAULT_COLUMNS.to_vec());
    }
}
