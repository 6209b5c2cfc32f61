// src/core/paths.rs

use crate::constants::USER_PRESETS_FILENAME;
use anyhow::{Result, anyhow};
use lazy_static::lazy_static;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

lazy_static! {
    static ref TRNCFG_CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the trncfg configuration directory (`~/.config/trncfg`),
/// creating it on first use. Memoized: later calls return the cached path.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    let mut cached_path_guard = TRNCFG_CONFIG_DIR
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    if let Some(path) = &*cached_path_guard {
        return Ok(path.clone());
    }

    let config_path = dirs::config_dir()
        .ok_or(PathError::ConfigDirNotFound)?
        .join("trncfg");

    if !config_path.exists() {
        fs::create_dir_all(&config_path).map_err(|e| PathError::ConfigDirCreation {
            path: config_path.display().to_string(),
            source: e,
        })?;
    }

    *cached_path_guard = Some(config_path.clone());

    Ok(config_path)
}

/// The user presets file inside the configuration directory.
pub fn user_presets_path() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(USER_PRESETS_FILENAME))
}

/// Expands `~` and environment variables in a user-entered path
/// (e.g. the `export` output directory).
pub fn expand_user_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| anyhow!("Failed to expand path '{}': {}", raw, e))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_user_path_passes_plain_paths_through() {
        let path = expand_user_path("deploy/artifacts").unwrap();
        assert_eq!(path, PathBuf::from("deploy/artifacts"));
    }

    #[test]
    fn test_expand_user_path_resolves_home() {
        if dirs::home_dir().is_none() {
            return;
        }
        let path = expand_user_path("~/artifacts").unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
