//! Configuration types for Kennel

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::KennelError;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Kennel configuration file (kennel.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KennelConfig {
    /// Seed dataset to start from. The built-in dataset is used when absent.
    pub seed_path: Option<PathBuf>,

    /// Simulated latency for every repository operation
    pub latency_ms: u64,

    /// `tracing` filter directive used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for KennelConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            latency_ms: 0,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl KennelConfig {
    /// Load configuration from a JSON file.
    ///
    /// A relative `seedPath` is resolved against the directory holding the
    /// config file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;

        if let Some(seed) = config.seed_path.take() {
            let resolved = match path.parent() {
                Some(dir) if seed.is_relative() => dir.join(seed),
                _ => seed,
            };
            config.seed_path = Some(resolved);
        }

        if config.log_filter.trim().is_empty() {
            return Err(KennelError::Config("logFilter must not be empty".to_string()));
        }

        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
