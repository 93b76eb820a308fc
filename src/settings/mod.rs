//! Persisted user settings

mod store;

pub use store::{load_settings, save_settings, Settings, SettingsError, COMPILER_PATH_KEY};
