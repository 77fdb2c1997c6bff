// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Storage configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Root directory for persisted stores (defaults to the platform data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Merge configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MergeConfig {
    /// Use the chain-of-thought merge prompt by default
    #[serde(default)]
    pub chain_of_thought: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub merge: MergeConfig,
}
