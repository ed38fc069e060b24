//! Application directory helpers anchored to a single `.procpal` folder.
//!
//! Log files live under the OS config directory (e.g., `%APPDATA%` on
//! Windows) by default; `PROCPAL_CONFIG_HOME` overrides the base for tests
//! or portable setups.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".procpal";

const CONFIG_HOME_ENV: &str = "PROCPAL_CONFIG_HOME";

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the logs directory inside the `.procpal` root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    logs_dir_under(&base)
}

fn logs_dir_under(base: &Path) -> Result<PathBuf, AppDirError> {
    let path = base.join(APP_DIR_NAME).join("logs");
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}
