use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

use serde_json::Value;

use super::KeyValueStore;
use crate::error::{OpencraftError, Result};

/// In-memory backing store.
///
/// Clones share the same entries, so a second component opened on a clone
/// sees what the first one wrote, the way a reload sees the same disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, Value>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, simulating an exhausted quota
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn insert_raw(&self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }

    pub fn raw(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &Value) -> Result<()> {
        if self.fail_writes.get() {
            return Err(OpencraftError::Storage {
                key: key.to_string(),
                source: io::Error::other("storage quota exceeded"),
            });
        }
        self.insert_raw(key, value.clone());
        Ok(())
    }
}
