use crate::slots::CopyPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "CMD Block - Relative Calculator.log";
pub const DEFAULT_SETTINGS_FILE: &str = "relcalc.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub copy_policy: CopyPolicy,
    pub log_file: PathBuf,
    pub always_on_top: bool,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            copy_policy: CopyPolicy::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            always_on_top: true,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("log_file must not be empty")]
    EmptyLogFile,
}

pub fn normalize_settings(settings: CalculatorSettings) -> Result<CalculatorSettings, SettingsError> {
    if settings.log_file.as_os_str().is_empty() {
        return Err(SettingsError::EmptyLogFile);
    }
    Ok(settings)
}

pub fn load_settings_file(path: &Path) -> Result<CalculatorSettings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: CalculatorSettings =
        toml::from_str(&data).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    normalize_settings(settings)
}

/// Where the effective settings came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    File,
    Defaults,
}

/// Loads `path` if it exists, otherwise returns the defaults.
pub fn load_settings_or_default(
    path: &Path,
) -> Result<(CalculatorSettings, SettingsSource), SettingsError> {
    if path.exists() {
        Ok((load_settings_file(path)?, SettingsSource::File))
    } else {
        Ok((CalculatorSettings::default(), SettingsSource::Defaults))
    }
}

pub fn save_settings_file(path: &Path, settings: &CalculatorSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let data = toml::to_string_pretty(settings)?;
    std::fs::write(path, data).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
