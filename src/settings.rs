//! User settings: provider choice, credentials and merge prompt templates
//! consumed by the generative merge call.

pub mod prompt;
mod settings_store;
mod settings_types;
pub mod templates;

pub use settings_store::{SETTINGS_STORAGE_KEY, SettingsStore};
pub use settings_types::{Provider, Settings, mask_key};
