use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpencraftError {
    #[error("Storage error for '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Stored value for '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not determine a data directory.\n\nPass --data-dir or set storage.data_dir in the config file.")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, OpencraftError>;
