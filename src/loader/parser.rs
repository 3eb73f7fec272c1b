use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let data = fs::read_to_string(file_path.as_ref()).map_err(Error::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::DeserializationError)?;

    Ok(parsed_data)
}

/// Like [`parse_json_file`], but a file that does not exist yields `T::default()`.
pub fn parse_json_file_or_default<T: DeserializeOwned + Default>(file_path: impl AsRef<Path>) -> Result<T> {
    match fs::read_to_string(file_path.as_ref()) {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("'{}' does not exist yet, starting empty.", file_path.as_ref().display());
            Ok(T::default())
        }
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Serializes `value` as pretty JSON into `file_path`.
///
/// The data is written to a sibling temporary file first and then renamed
/// over the target, so readers never observe a half-written file.
pub fn write_json_file<T: Serialize>(file_path: impl AsRef<Path>, value: &T) -> Result<()> {
    let file_path = file_path.as_ref();
    let data = serde_json::to_string_pretty(value)?;

    let mut tmp_path = file_path.as_os_str().to_owned();
    tmp_path.push(".tmp");

    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, file_path)?;

    Ok(())
}
