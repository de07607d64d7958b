mod preferences;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use capacity_source::{DEFAULT_CAPACITY_URL, DEFAULT_USER_AGENT};

pub use preferences::{LastLocation, Preference, PreferenceError, PreferenceStore, Weight};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    capacity_url: String,
    user_agent: String,
    fetch_timeout_secs: u64
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            capacity_url: DEFAULT_CAPACITY_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_secs: AppSettings::DEFAULT_FETCH_TIMEOUT_SECS as u64
        }
    }
}

impl AppSettings {
    const CAPACITY_URL: &'static str = "capacity_url";
    const USER_AGENT: &'static str = "user_agent";
    const FETCH_TIMEOUT_SECS: &'static str = "fetch_timeout_secs";
    const DEFAULT_FETCH_TIMEOUT_SECS: i64 = 10;
    const CONFIG_FILENAME: &'static str = "e-range-conf";
    const ENV_PREFIX: &'static str = "ERANGE";

    /// Load settings from `e-range-conf.toml` in `config_dir` with `ERANGE_*` environment
    /// variables taking precedence. If the file is missing or unreadable the defaults are
    /// used, and a missing file is written out so there is something to edit next time.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = AppSettings::config_file_stem(config_dir);
        match AppSettings::default_builder()?
            .add_source(config::File::with_name(&config_path.to_string_lossy()))
            .add_source(config::Environment::with_prefix(AppSettings::ENV_PREFIX))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = AppSettings::default_builder()?
                    .add_source(config::Environment::with_prefix(AppSettings::ENV_PREFIX))
                    .build()?;
                let ret: AppSettings = settings.try_deserialize()?;
                if !config_path.with_extension("toml").is_file() {
                    ret.write(config_dir).unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                }
                Ok(ret)
            }
        }
    }

    fn default_builder() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default(AppSettings::CAPACITY_URL, DEFAULT_CAPACITY_URL)?
            .set_default(AppSettings::USER_AGENT, DEFAULT_USER_AGENT)?
            .set_default(AppSettings::FETCH_TIMEOUT_SECS, AppSettings::DEFAULT_FETCH_TIMEOUT_SECS)
    }

    fn config_file_stem(config_dir: &Path) -> PathBuf {
        config_dir.join(AppSettings::CONFIG_FILENAME)
    }

    pub fn capacity_url(&self) -> &str {
        &self.capacity_url
    }

    pub fn set_capacity_url(&mut self, url: &str) {
        self.capacity_url = url.to_string();
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn write(&self, config_dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(config_dir)?;
        let path = AppSettings::config_file_stem(config_dir).with_extension("toml");
        fs::write(path, toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;
    use capacity_source::DEFAULT_CAPACITY_URL;
    use crate::settings::AppSettings;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load(dir.path()).unwrap();
        assert_eq!(settings.capacity_url(), DEFAULT_CAPACITY_URL);
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(10));
        assert!(dir.path().join("e-range-conf.toml").is_file());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("e-range-conf.toml"),
                  "capacity_url = \"http://localhost:8080/akku\"\nfetch_timeout_secs = 3\n").unwrap();
        let settings = AppSettings::load(dir.path()).unwrap();
        assert_eq!(settings.capacity_url(), "http://localhost:8080/akku");
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(3));
        assert_eq!(settings.user_agent(), AppSettings::default().user_agent());
    }

    #[test]
    fn written_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = AppSettings::default();
        settings.set_capacity_url("http://example.invalid/akku");
        settings.write(dir.path()).unwrap();
        assert_eq!(AppSettings::load(dir.path()).unwrap(), settings);
    }
}
