#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::collections::VecDeque;

use liftlog_domain as domain;
use liftlog_web_app::log;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;
pub mod schema;

/// Synchronous string key-value store holding one JSON document per key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, domain::StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), domain::StorageError>;
    fn remove(&self, key: &str) -> Result<(), domain::StorageError>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "gym_sessions")]
    Sessions,
    #[strum(serialize = "gym_profile")]
    Profile,
    #[strum(serialize = "gym_settings")]
    Settings,
    #[strum(serialize = "gym_log")]
    Log,
}

const MAX_LOG_ENTRIES: usize = 100;

/// Repositories on top of a key-value store.
///
/// Each entity is stored as a JSON document under its own key. Stored documents are decoded
/// through the records of [`schema`]. Documents that cannot be decoded result in
/// [`domain::StorageError::Decode`].
pub struct JsonStore<S> {
    store: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read<R: DeserializeOwned>(&self, key: Key) -> Result<Option<R>, domain::StorageError> {
        self.store
            .get(key.as_ref())?
            .map(|value| serde_json::from_str(&value).map_err(decode_error))
            .transpose()
    }

    fn write<R: Serialize>(&self, key: Key, record: &R) -> Result<(), domain::StorageError> {
        let value = serde_json::to_string(record)
            .map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        self.store.set(key.as_ref(), &value)
    }

    fn read_session_records(&self) -> Result<Vec<domain::WorkoutSession>, domain::StorageError> {
        match self.read::<schema::Sessions>(Key::Sessions)? {
            Some(sessions) => Vec::try_from(sessions).map_err(decode_error),
            None => Ok(vec![]),
        }
    }

    fn write_session_records(
        &self,
        sessions: &[domain::WorkoutSession],
    ) -> Result<(), domain::StorageError> {
        self.write(Key::Sessions, &schema::Sessions::from(sessions))
    }
}

fn decode_error<E: std::error::Error + 'static>(err: E) -> domain::StorageError {
    domain::StorageError::Decode(Box::new(err))
}

impl<S: KeyValueStore> domain::SessionRepository for JsonStore<S> {
    fn read_sessions(&self) -> Result<Vec<domain::WorkoutSession>, domain::ReadError> {
        Ok(self.read_session_records()?)
    }

    fn write_session(
        &self,
        session: domain::WorkoutSession,
    ) -> Result<domain::WorkoutSession, domain::UpdateError> {
        let mut sessions = self.read_session_records()?;
        domain::insert_or_replace(&mut sessions, session.clone());
        self.write_session_records(&sessions)?;
        Ok(session)
    }

    fn delete_session(
        &self,
        id: &domain::SessionID,
    ) -> Result<domain::SessionID, domain::DeleteError> {
        let mut sessions = self.read_session_records()?;
        if domain::remove_session(&mut sessions, id) {
            self.write_session_records(&sessions)?;
        }
        Ok(id.clone())
    }

    fn delete_all_sessions(&self) -> Result<(), domain::DeleteError> {
        Ok(self.store.remove(Key::Sessions.as_ref())?)
    }
}

impl<S: KeyValueStore> domain::ProfileRepository for JsonStore<S> {
    fn read_profile(&self) -> Result<domain::UserProfile, domain::ReadError> {
        Ok(self
            .read::<schema::Profile>(Key::Profile)?
            .map(domain::UserProfile::from)
            .unwrap_or_default())
    }

    fn write_profile(
        &self,
        profile: domain::UserProfile,
    ) -> Result<domain::UserProfile, domain::UpdateError> {
        self.write(Key::Profile, &schema::Profile::from(&profile))?;
        Ok(profile)
    }
}

impl<S: KeyValueStore> domain::SettingsRepository for JsonStore<S> {
    fn read_settings(&self) -> Result<domain::AppSettings, domain::ReadError> {
        Ok(self
            .read::<schema::Settings>(Key::Settings)?
            .map(domain::AppSettings::from)
            .unwrap_or_default())
    }

    fn write_settings(
        &self,
        settings: domain::AppSettings,
    ) -> Result<domain::AppSettings, domain::UpdateError> {
        self.write(Key::Settings, &schema::Settings::from(&settings))?;
        Ok(settings)
    }
}

impl<S: KeyValueStore + Send + Sync + 'static> log::Repository for JsonStore<S> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        Ok(self
            .read(Key::Log)
            .map_err(|err| log::Error::Unknown(err.to_string()))?
            .unwrap_or_default())
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        self.write(Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
