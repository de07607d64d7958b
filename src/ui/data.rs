/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of e-range.
 *
 * e-range is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * e-range is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with e-range. If not, see <https://www.gnu.org/licenses/>.
 */


use tracing::{info, warn};
use crate::data::{create_local_data_dir_if_missing, get_default_preferences_path, get_local_app_data_path};
use crate::settings::{AppSettings, LastLocation, Preference, PreferenceError, PreferenceStore, Weight};

/// Everything the screens share: application settings and remembered preferences
pub struct ApplicationData {
    pub(crate) settings: AppSettings,
    pub(crate) preferences: PreferenceStore
}

impl ApplicationData {
    pub fn new() -> ApplicationData {
        create_local_data_dir_if_missing();
        let settings = AppSettings::load(&get_local_app_data_path()).unwrap_or_else(|e| {
            warn!("Failed to load settings. {}", e.to_string());
            AppSettings::default()
        });
        info!("Capacities will be fetched from {}", settings.capacity_url());
        let preferences = PreferenceStore::open(&get_default_preferences_path());
        ApplicationData::from_parts(settings, preferences)
    }

    pub fn from_parts(settings: AppSettings, preferences: PreferenceStore) -> ApplicationData {
        match preferences.contains::<Weight>() {
            true => info!("{} remembered as {} kg", Weight::friendly_name(), preferences.get::<Weight>()),
            false => info!("{} not set", Weight::friendly_name())
        }
        ApplicationData { settings, preferences }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }

    pub fn remembered_weight(&self) -> f64 {
        self.preferences.get::<Weight>()
    }

    pub fn remember_weight(&mut self, weight_kg: f64) -> Result<(), PreferenceError> {
        self.preferences.set::<Weight>(weight_kg)
    }

    pub fn remembered_location(&self) -> String {
        self.preferences.get::<LastLocation>()
    }

    pub fn remember_location(&mut self, location: &str) -> Result<(), PreferenceError> {
        self.preferences.set::<LastLocation>(location.to_string())
    }
}
