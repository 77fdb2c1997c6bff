//! Durable key-value storage shared by every persisted store
//!
//! Values are JSON documents addressed by namespaced keys such as
//! `opencraft/settings`. Reads and writes are synchronous: a successful
//! `write` means the value is on durable storage.

mod file_store;
#[cfg(test)]
mod memory_store;

pub use file_store::FileStore;
#[cfg(test)]
pub use memory_store::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{OpencraftError, Result};

pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<Value>>;

    fn write(&self, key: &str, value: &Value) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &Value) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Reads `key` and decodes it as `T`.
///
/// Missing values, unparseable files and values of the wrong shape all yield
/// `default()`. Only backend failures are returned as errors.
pub fn load_or_default<S, T, F>(store: &S, key: &str, default: F) -> Result<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let value = match store.read(key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            log::debug!("Nothing stored under {}, using defaults", key);
            return Ok(default());
        }
        Err(OpencraftError::Corrupt { source, .. }) => {
            log::warn!("Discarding unreadable value under {}: {}", key, source);
            return Ok(default());
        }
        Err(e) => return Err(e),
    };

    match serde_json::from_value(value) {
        Ok(decoded) => Ok(decoded),
        Err(e) => {
            log::warn!("Discarding incompatible value under {}: {}", key, e);
            Ok(default())
        }
    }
}

pub fn save<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_value(value).map_err(|source| OpencraftError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &json)?;
    log::debug!("Saved {}", key);
    Ok(())
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
