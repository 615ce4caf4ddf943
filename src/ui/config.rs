use std::path::{Path, PathBuf};

use log::error;
use serde::{Deserialize, Serialize};

use crate::AtriumError;

use super::view_state::Tab;

const CONFIG_DIR_NAME: &str = "atrium";
const CONFIG_FILE_NAME: &str = "config.json";

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1100.;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub dark_mode: bool,
    pub start_tab: Tab,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            dark_mode: false,
            start_tab: Tab::Home,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, AtriumError> {
        Ok(dirs::config_dir()
            .ok_or(AtriumError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Load the config from the user's config directory.
    ///
    /// Returns `None` when there is no config directory, no file yet, or the
    /// file cannot be read; the caller falls back to defaults.
    pub fn from_local_file() -> Option<Self> {
        let config_path = Self::default_path().ok()?;
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(e) => {
                error!("Ignoring config file {:?}: {}", config_path, e);
                None
            }
        }
    }

    pub fn load(config_path: &Path) -> Result<Option<Self>, AtriumError> {
        if !config_path.exists() {
            return Ok(None);
        }
        let file = std::fs::File::open(config_path)
            .map_err(|e| AtriumError::ConfigIOError { source: e })?;
        serde_json::from_reader(file)
            .map(Some)
            .map_err(|e| AtriumError::ConfigSerializeError { source: e })
    }

    pub fn save(&self) -> Result<(), AtriumError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AtriumError> {
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| AtriumError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| AtriumError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| AtriumError::ConfigSerializeError { source: e })
    }

    /// Remember where the user left off.
    ///
    /// Recommendations are not persisted, so reopening on that tab would only
    /// show the empty state; the planner is used instead.
    pub fn record_last_tab(&mut self, tab: Tab) {
        self.start_tab = match tab {
            Tab::Recommendations => Tab::RoomPlanner,
            other => other,
        };
    }
}
