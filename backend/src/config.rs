//! Environment-driven server configuration.

use std::path::PathBuf;

pub const DATASET_DIR_VAR: &str = "ELLE_DATASET_DIR";
pub const BIND_ADDR_VAR: &str = "ELLE_BIND_ADDR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Directory holding `questions-<language>.json` files.
    pub dataset_dir: PathBuf,
    pub bind_addr: String,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            dataset_dir: PathBuf::from(lookup(DATASET_DIR_VAR).unwrap_or("data".to_string())),
            bind_addr: lookup(BIND_ADDR_VAR).unwrap_or("127.0.0.1:8080".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let config = BackendConfig::from_lookup(|_| None);
        assert_eq!(config.dataset_dir, PathBuf::from("data"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = BackendConfig::from_lookup(|key| match key {
            DATASET_DIR_VAR => Some("/srv/elle".to_string()),
            BIND_ADDR_VAR => Some("0.0.0.0:9000".to_string()),
            _ => None,
        });
        assert_eq!(config.dataset_dir, PathBuf::from("/srv/elle"));
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }
}
