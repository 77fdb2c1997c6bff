use super::prompt::render_merge_prompt;
use super::settings_types::Settings;
use crate::error::Result;
use crate::skill::Skill;
use crate::storage::{self, KeyValueStore};

pub const SETTINGS_STORAGE_KEY: &str = "opencraft/settings";

/// Persisted user settings
#[derive(Debug)]
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
    settings: Settings,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn open(store: S) -> Result<Self> {
        let settings = storage::load_or_default(&store, SETTINGS_STORAGE_KEY, Settings::default)?;
        Ok(SettingsStore { store, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings with `updater(current)` and persists them.
    /// On a failed write the previous settings stay in effect.
    pub fn update<F>(&mut self, updater: F) -> Result<()>
    where
        F: FnOnce(Settings) -> Settings,
    {
        let updated = updater(self.settings.clone());
        self.replace(updated)
    }

    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.replace(Settings::default())
    }

    /// The merge prompt for `first` and `second` using the stored templates
    pub fn render_merge_prompt(&self, first: &Skill, second: &Skill, chain_of_thought: bool) -> String {
        render_merge_prompt(self.settings.merge_template(chain_of_thought), first, second)
    }

    fn replace(&mut self, settings: Settings) -> Result<()> {
        storage::save(&self.store, SETTINGS_STORAGE_KEY, &settings)?;
        self.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_store_tests.rs"]
mod settings_store_tests;
