use liftlog_domain::StorageError;

use crate::KeyValueStore;

/// Browser local storage.
///
/// Local storage is looked up on every access. If it is unavailable (e.g. in a worker or when
/// disabled by the browser), all operations fail with [`StorageError::NoStorage`].
pub struct LocalStorage;

fn other(err: &impl std::fmt::Debug) -> StorageError {
    StorageError::Other(format!("{err:?}").into())
}

fn storage(window: Option<web_sys::Window>) -> Result<web_sys::Storage, StorageError> {
    window
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::NoStorage)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage(web_sys::window())?
            .get_item(key)
            .map_err(|err| other(&err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage(web_sys::window())?
            .set_item(key, value)
            .map_err(|err| other(&err))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        storage(web_sys::window())?
            .remove_item(key)
            .map_err(|err| other(&err))
    }
}
