//! Persisted boolean preferences for the front end.

use crate::storage::{KeyValueStore, keys};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub sound_effects: bool,
    pub animations: bool,
    pub calm_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sound_effects: true,
            animations: true,
            calm_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SettingToggle {
    DarkMode,
    SoundEffects,
    Animations,
    CalmMode,
}

impl Settings {
    /// Stored settings, or defaults when missing or unreadable.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(keys::SETTINGS) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt settings: {e}");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        let result = serde_json::to_string(self)
            .map_err(Into::into)
            .and_then(|raw| store.set(keys::SETTINGS, &raw));
        if let Err(e) = result {
            tracing::warn!("Could not save settings: {e}");
        }
    }

    pub fn get(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::DarkMode => self.dark_mode,
            SettingToggle::SoundEffects => self.sound_effects,
            SettingToggle::Animations => self.animations,
            SettingToggle::CalmMode => self.calm_mode,
        }
    }

    pub fn set(&mut self, toggle: SettingToggle, value: bool) {
        let slot = match toggle {
            SettingToggle::DarkMode => &mut self.dark_mode,
            SettingToggle::SoundEffects => &mut self.sound_effects,
            SettingToggle::Animations => &mut self.animations,
            SettingToggle::CalmMode => &mut self.calm_mode,
        };
        *slot = value;
    }
}
