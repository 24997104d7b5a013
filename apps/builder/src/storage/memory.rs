use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::anyhow;

use crate::errors::AppError;
use crate::storage::DocumentStore;

/// In-process store. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("memory store lock poisoned")))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("memory store lock poisoned")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
