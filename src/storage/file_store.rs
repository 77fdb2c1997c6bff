use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::KeyValueStore;
use crate::error::{OpencraftError, Result};

const FILE_EXTENSION: &str = "json";

/// Stores each key as a JSON file below a root directory.
///
/// `opencraft/settings` lives at `<root>/opencraft/settings.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    /// Rooted at the platform data directory, if there is one
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(FileStore::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut segments: Vec<&str> = key
            .split('/')
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect();
        let file_name = format!("{}.{}", segments.pop().unwrap_or("_"), FILE_EXTENSION);

        let mut path = self.root.clone();
        path.extend(segments);
        path.push(file_name);
        path
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        // Raw bytes, so non-UTF-8 garbage is reported as corrupt rather than
        // as a backend failure
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(OpencraftError::Storage {
                    key: key.to_string(),
                    source,
                });
            }
        };

        log::debug!("Read {} bytes from {:?}", contents.len(), path);

        serde_json::from_slice(&contents)
            .map(Some)
            .map_err(|source| OpencraftError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write leaves the previous value intact. The file and its
    /// directory are both synced before returning.
    fn write(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.path_for(key);
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| OpencraftError::Serialize {
            key: key.to_string(),
            source,
        })?;

        write_durably(&path, &bytes).map_err(|source| {
            log::error!("Failed to write {:?}: {}", path, source);
            OpencraftError::Storage {
                key: key.to_string(),
                source,
            }
        })
    }
}

fn write_durably(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension(format!("{}.tmp", FILE_EXTENSION));
    if let Err(e) = write_and_rename(&tmp_path, path, bytes) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            if cleanup.kind() != io::ErrorKind::NotFound {
                log::warn!("Failed to remove {:?}: {}", tmp_path, cleanup);
            }
        }
        return Err(e);
    }

    if let Some(parent) = parent {
        sync_dir(parent)?;
    }

    Ok(())
}

fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    {
        let mut file = File::create(tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    fs::rename(tmp_path, path)
}

/// Persists the rename itself. Platforms that cannot open a directory as a
/// file (Windows) are skipped.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "file_store_tests.rs"]
mod file_store_tests;
