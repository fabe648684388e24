use crate::{ReadError, UpdateError};

pub trait SettingsService {
    /// The stored settings, or the default settings if none can be read.
    fn get_settings(&self) -> AppSettings;
    fn save_settings(&self, settings: AppSettings) -> Result<AppSettings, UpdateError>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<AppSettings, ReadError>;
    fn write_settings(&self, settings: AppSettings) -> Result<AppSettings, UpdateError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub sound_enabled: bool,
    /// Default rest timer duration in seconds.
    pub rest_timer_default: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            rest_timer_default: 90,
        }
    }
}
