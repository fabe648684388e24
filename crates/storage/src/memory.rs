use std::{collections::BTreeMap, sync::Mutex};

use liftlog_domain::StorageError;

use crate::KeyValueStore;

/// Volatile store keeping all entries in memory.
#[derive(Debug, Default)]
pub struct Memory {
    entries: Mutex<BTreeMap<String, String>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|err| StorageError::Other(err.to_string().into()))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Memory {
    fn from(value: [(&str, &str); N]) -> Self {
        Self {
            entries: Mutex::new(
                value
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for Memory {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Store used when no persistent storage is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl KeyValueStore for Unavailable {
    fn get(&self, _: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::NoStorage)
    }

    fn set(&self, _: &str, _: &str) -> Result<(), StorageError> {
        Err(StorageError::NoStorage)
    }

    fn remove(&self, _: &str) -> Result<(), StorageError> {
        Err(StorageError::NoStorage)
    }
}
