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


use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;
use directories::BaseDirs;
use tracing::{info, warn};

const LOCAL_DATA_DIRNAME: &str = "e-range";
const PREFERENCES_FILENAME: &str = "preferences.toml";
pub const LOG_FILENAME: &str = "e_range.log";

fn backup_data_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_local_app_data_path() -> PathBuf {
    let mut local_data_root : PathBuf = match BaseDirs::new() {
        None => backup_data_dir(),
        Some(basedirs) => { basedirs.data_local_dir().to_path_buf() }
    };
    local_data_root.push(LOCAL_DATA_DIRNAME);
    local_data_root
}

pub fn get_default_preferences_path() -> PathBuf {
    let mut path = get_local_app_data_path();
    path.push(PREFERENCES_FILENAME);
    path
}

/// Directory the log file is written to. Falls back to the current directory if the local
/// data directory can't be created
pub fn get_log_dir() -> PathBuf {
    let local_data_path = get_local_app_data_path();
    match create_dir_all(&local_data_path) {
        Ok(_) => local_data_path,
        Err(_) => backup_data_dir()
    }
}

pub fn create_local_data_dir_if_missing() {
    let local_data_path = get_local_app_data_path();
    if !local_data_path.is_dir() {
        match create_dir_all(&local_data_path) {
            Ok(_) => {
                info!("Created local data dir {}", local_data_path.display());
            }
            Err(e) => {
                warn!("Failed to create local data dir. {}", e.to_string())
            }
        }
    } else {
        info!("Local app data dir found at {}", local_data_path.display());
    }
}
