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


use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(thiserror::Error, Debug)]
pub enum PreferenceError {
    #[error("failed to write `{0}`. {1}")]
    Write(PathBuf, io::Error),
    #[error("failed to encode `{0}`. {1}")]
    Encode(&'static str, toml::ser::Error),
}

/// A remembered value. Each preference names its storage key, the type stored under it and
/// what to use when nothing (or something unreadable) is stored
pub trait Preference {
    type Value: Serialize + DeserializeOwned + Clone + Debug;

    fn key() -> &'static str;
    fn friendly_name() -> &'static str;
    fn default_value() -> Self::Value;
}

/// Rider weight in kg as last used for a calculation
pub struct Weight;

impl Preference for Weight {
    type Value = f64;

    fn key() -> &'static str { "weight" }
    fn friendly_name() -> &'static str { "Rider weight" }
    fn default_value() -> Self::Value { 70.0 }
}

/// Last location searched for charging stations
pub struct LastLocation;

impl Preference for LastLocation {
    type Value = String;

    fn key() -> &'static str { "last_location" }
    fn friendly_name() -> &'static str { "Last location" }
    fn default_value() -> Self::Value { String::from("Osnabrück") }
}

/// Key/value preferences backed by a toml file. Every `set` is written straight through,
/// the last write wins.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    values: toml::Table
}

impl PreferenceStore {
    /// Open the store at `path`. A missing or unreadable file gives an empty store
    pub fn open(path: &Path) -> PreferenceStore {
        let values = match fs::read_to_string(path) {
            Ok(contents) => {
                toml::from_str::<toml::Table>(&contents).unwrap_or_else(|e| {
                    warn!("Ignoring unreadable preferences in {}. {}", path.display(), e.to_string());
                    toml::Table::new()
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No preferences stored at {}", path.display());
                toml::Table::new()
            }
            Err(e) => {
                warn!("Failed to read {}. {}", path.display(), e.to_string());
                toml::Table::new()
            }
        };
        PreferenceStore { path: path.to_path_buf(), values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get<P: Preference>(&self) -> P::Value {
        match self.values.get(P::key()) {
            None => P::default_value(),
            Some(value) => {
                let decoded: Result<P::Value, toml::de::Error> = value.clone().try_into();
                decoded.unwrap_or_else(|e| {
                    warn!("{} has an unexpected value {}. Using default. {}", P::friendly_name(), value, e.to_string());
                    P::default_value()
                })
            }
        }
    }

    pub fn set<P: Preference>(&mut self, value: P::Value) -> Result<(), PreferenceError> {
        let encoded = toml::Value::try_from(&value).map_err(|e| {
            PreferenceError::Encode(P::key(), e)
        })?;
        debug!("Setting {} to {:?}", P::key(), value);
        self.values.insert(P::key().to_string(), encoded);
        self.write()
    }

    pub fn contains<P: Preference>(&self) -> bool {
        self.values.contains_key(P::key())
    }

    fn write(&self) -> Result<(), PreferenceError> {
        let contents = toml::to_string(&self.values).map_err(|e| {
            PreferenceError::Encode("preferences", e)
        })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PreferenceError::Write(self.path.clone(), e))?;
        }
        fs::write(&self.path, contents).map_err(|e| PreferenceError::Write(self.path.clone(), e))
    }
}
