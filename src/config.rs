//! Kiosk configuration
//!
//! Paths to the two backing files. Defaults match the conventional
//! `menu.txt` / `credentials.txt` in the working directory; a JSON
//! config file and CLI flags can override them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{KioskError, KioskResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    pub menu_path: PathBuf,
    pub credentials_path: PathBuf,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            menu_path: PathBuf::from("menu.txt"),
            credentials_path: PathBuf::from("credentials.txt"),
        }
    }
}

impl KioskConfig {
    /// Loads configuration from a JSON file. Missing keys fall back to
    /// the defaults.
    pub fn from_file(path: impl Into<PathBuf>) -> KioskResult<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).map_err(|e| KioskError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| KioskError::Config {
            path,
            message: e.to_string(),
        })
    }
}
