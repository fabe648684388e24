use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    /// Stored entries, newest first.
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Install the logger and persist all records in `repository`.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl Logger {
    fn repository() -> Option<Arc<Mutex<dyn Repository>>> {
        LOG.lock().ok().and_then(|log| log.clone())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(repository) = Self::repository() else {
            return;
        };
        let message = record.args().to_string();

        #[cfg(target_arch = "wasm32")]
        match record.level() {
            Level::Error => gloo_console::error!(message.clone()),
            Level::Warn => gloo_console::warn!(message.clone()),
            Level::Info => gloo_console::info!(message.clone()),
            Level::Debug | Level::Trace => gloo_console::debug!(message.clone()),
        }

        if let Ok(repository) = repository.lock() {
            let _ = repository.write_entry(Entry {
                time: Local::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message,
            });
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::Log;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Entries(Mutex<VecDeque<Entry>>);

    impl Repository for Entries {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            self.0
                .lock()
                .map(|entries| entries.clone())
                .map_err(|err| Error::Unknown(err.to_string()))
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            self.0
                .lock()
                .map(|mut entries| entries.push_front(entry))
                .map_err(|err| Error::Unknown(err.to_string()))
        }
    }

    #[test]
    fn test_logger_writes_entries() {
        let entries = Arc::new(Mutex::new(Entries::default()));
        let repository: Arc<Mutex<dyn Repository>> = entries.clone();
        *LOG.lock().unwrap() = Some(repository);

        Logger.log(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("using default {}", "profile"))
                .build(),
        );
        Logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("failed to save session: no storage"))
                .build(),
        );

        let entries = entries.lock().unwrap().read_entries().unwrap();
        assert_eq!(
            entries
                .iter()
                .map(|e| (e.level, e.message.as_str()))
                .collect::<Vec<_>>(),
            vec![
                (Level::Error, "failed to save session: no storage"),
                (Level::Warn, "using default profile"),
            ]
        );
    }

    #[test]
    fn test_entry_serde() {
        let entry = Entry {
            time: "Jun 15 18:00:00".to_string(),
            level: Level::Debug,
            message: "failed to get settings: no storage".to_string(),
        };
        let serialized = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            serialized,
            r#"{"time":"Jun 15 18:00:00","level":"Debug","message":"failed to get settings: no storage"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&serialized).unwrap(), entry);
    }
}
