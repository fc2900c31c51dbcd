//! User config: remembers the default tracking workbook between runs.

use crate::error::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Workbook used when a command is run without `-w`.
    pub default_workbook: Option<PathBuf>,
}

/// Config directory: `ISSUETRACK_CONFIG_DIR` override (tests, portable
/// installs), else the platform config dir.
fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("ISSUETRACK_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("issuetrack")
}

fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load the config file; an absent file is the default config.
pub fn load_config() -> TrackerResult<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> TrackerResult<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| TrackerError::Config(format!("Invalid config {}: {}", path.display(), e)))
}

/// Persist the config, creating the directory on first use.
pub fn save_config(config: &AppConfig) -> TrackerResult<()> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> TrackerResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

/// Workbook a command should act on: the `-w` flag, else the configured
/// default.
pub fn resolve_workbook(flag: Option<PathBuf>) -> TrackerResult<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    load_config()?.default_workbook.ok_or_else(|| {
        TrackerError::Config(
            "No workbook given and none configured; pass -w or run 'issuetrack init'".to_string(),
        )
    })
}

/// Default location for a new workbook: timestamped name in Documents,
/// home directory as fallback.
pub fn default_workbook_path(now: chrono::DateTime<chrono::Local>) -> PathBuf {
    let filename = format!("Issue_Tracker_{}.xlsx", now.format("%Y%m%d_%H%M%S"));
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(filename)
}
