//! Window and appearance configuration, read from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::error::{Result, TrackerError};
use crate::views::View;

pub const DEFAULT_CONFIG_FILE: &str = "health-tracker.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub theme: Theme,
    /// TTF used for both the proportional and monospace families.
    pub font_path: Option<PathBuf>,
    pub body_text_size: f32,
    pub heading_text_size: f32,
    pub start_view: View,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 860.0,
            theme: Theme::Dark,
            font_path: None,
            body_text_size: 18.0,
            heading_text_size: 28.0,
            start_view: View::Home,
        }
    }
}

impl Config {
    /// An explicit path must exist; otherwise `./health-tracker.json` is used
    /// when present, falling back to defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        Self::load_with_fallback(config_path, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_with_fallback(explicit: Option<&PathBuf>, local: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if local.exists() {
            return Self::load_from_file(local);
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TrackerError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| TrackerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}
