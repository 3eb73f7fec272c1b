use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::allocator::DEFAULT_MAX_SEARCH_DAYS;
use crate::domain::registration::RegistrationSettings;
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

pub const ENV_DATA_DIR: &str = "HOSPITAL_DATA_DIR";
pub const ENV_LOG_DIR: &str = "HOSPITAL_LOG_DIR";
pub const ENV_MAX_SEARCH_DAYS: &str = "HOSPITAL_MAX_SEARCH_DAYS";
pub const ENV_REJECT_DUPLICATES: &str = "HOSPITAL_REJECT_DUPLICATES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub max_search_days: u32,
    pub reject_duplicate_patients: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("data"),
            log_dir: PathBuf::from("logs"),
            max_search_days: DEFAULT_MAX_SEARCH_DAYS,
            reject_duplicate_patients: false,
        }
    }
}

/// On-disk shape of the optional configuration file. Absent keys keep the
/// value of the layer below.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFileDto {
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub max_search_days: Option<u32>,
    pub reject_duplicate_patients: Option<bool>,
}

impl AppConfig {
    /// Defaults, then the configuration file (if given), then the environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = AppConfig::default();
        if let Some(path) = config_file {
            config.apply_file(parse_json_file::<ConfigFileDto>(path)?);
        }
        config.apply_env_with(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn apply_file(&mut self, file: ConfigFileDto) {
        if let Some(data_dir) = file.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(log_dir) = file.log_dir {
            self.log_dir = log_dir;
        }
        if let Some(days) = file.max_search_days {
            self.max_search_days = days;
        }
        if let Some(reject) = file.reject_duplicate_patients {
            self.reject_duplicate_patients = reject;
        }
    }

    /// Overrides values from environment variables read through `lookup`.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Some(log_dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(log_dir);
        }
        if let Some(days) = lookup(ENV_MAX_SEARCH_DAYS) {
            match days.trim().parse::<u32>() {
                Ok(days) => self.max_search_days = days,
                Err(_) => log::warn!("{} = '{}' is not a number of days, keeping {}.", ENV_MAX_SEARCH_DAYS, days, self.max_search_days),
            }
        }
        if let Some(reject) = lookup(ENV_REJECT_DUPLICATES) {
            match reject.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.reject_duplicate_patients = true,
                "0" | "false" | "no" => self.reject_duplicate_patients = false,
                _ => log::warn!("{} = '{}' is not a boolean, keeping {}.", ENV_REJECT_DUPLICATES, reject, self.reject_duplicate_patients),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_search_days == 0 {
            return Err(Error::InvalidConfig("maxSearchDays must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn registration_settings(&self) -> RegistrationSettings {
        RegistrationSettings {
            max_search_days: self.max_search_days,
            reject_duplicate_patients: self.reject_duplicate_patients,
        }
    }
}
