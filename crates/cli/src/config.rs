//! `config.json` in the data directory.

use anyhow::{Context, Result};
use bonsai_chain::SessionConfig;
use bonsai_core::{Amount, GasTier, INITIAL_BALANCE};
use bonsai_storage::Storage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const CONFIG_FILE: &str = "config.json";

/// On-disk configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub initial_balance: Amount,
    pub journey_step_ms: u64,
    pub default_tier: GasTier,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            journey_step_ms: 700,
            default_tier: GasTier::default(),
        }
    }
}

impl From<ConfigFile> for SessionConfig {
    fn from(file: ConfigFile) -> Self {
        SessionConfig {
            initial_balance: file.initial_balance,
            journey_step: Duration::from_millis(file.journey_step_ms),
            default_tier: file.default_tier,
        }
    }
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Read the config, falling back to defaults when the file does not exist.
pub fn load_config(data_dir: &Path) -> Result<ConfigFile> {
    let path = config_path(data_dir);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ConfigFile::default());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

pub fn save_config(data_dir: &Path, config: &ConfigFile) -> Result<PathBuf> {
    let path = config_path(data_dir);
    fs::write(&path, serde_json::to_string_pretty(config)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

pub fn open_storage(data_dir: &Path) -> Result<Storage> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
    Storage::open(data_dir.join("db")).with_context(|| "Failed to open storage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile {
            initial_balance: "250.5".parse().unwrap(),
            journey_step_ms: 0,
            default_tier: GasTier::Fast,
        };
        save_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), config);

        let raw = fs::read_to_string(config_path(dir.path())).unwrap();
        assert!(raw.contains("\"initial_balance\": \"250.5\""));
        assert!(raw.contains("\"default_tier\": \"fast\""));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config_path(dir.path()), r#"{ "journey_step_ms": 10 }"#).unwrap();

        let session: SessionConfig = load_config(dir.path()).unwrap().into();
        assert_eq!(session.journey_step, Duration::from_millis(10));
        assert_eq!(session.initial_balance, INITIAL_BALANCE);
        assert_eq!(session.default_tier, GasTier::Medium);
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config_path(dir.path()), "not json").unwrap();
        assert!(load_config(dir.path()).is_err());
    }
}
