use crate::api::processor::CommandProcessor;
use crate::config::AppConfig;
use crate::domain::registration::Hospital;
use crate::error::Result;
use crate::store::JsonFileStore;

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod store;

/// Builds the command processor backed by the flat files in `config.data_dir`.
pub fn build_processor(config: &AppConfig) -> Result<CommandProcessor<JsonFileStore>> {
    config.validate()?;

    let store = JsonFileStore::new(&config.data_dir);
    log::debug!("Using data directory '{}'.", store.data_dir().display());

    let hospital = Hospital::new(store, config.registration_settings())?;
    Ok(CommandProcessor::new(hospital))
}
