//! Data directory layout for Courier.
//!
//! Resolves where the record log and `config.toml` live.

use std::path::{Path, PathBuf};

use courier_types::config::StoreConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `COURIER_DATA_DIR` environment variable
/// 2. `~/.courier` under the user's home directory
/// 3. `.courier` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("COURIER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".courier");
    }

    PathBuf::from(".courier")
}

/// Path of the record log: `{data_dir}/{store.file_name}`.
pub fn record_log_path(data_dir: &Path, store: &StoreConfig) -> PathBuf {
    data_dir.join(&store.file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_log_path() {
        let data_dir = PathBuf::from("/home/user/.courier");
        assert_eq!(
            record_log_path(&data_dir, &StoreConfig::default()),
            PathBuf::from("/home/user/.courier/messages.csv")
        );
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("COURIER_DATA_DIR", "/tmp/test-courier");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-courier"));
        unsafe {
            std::env::remove_var("COURIER_DATA_DIR");
        }
    }
}
