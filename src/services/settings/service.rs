use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::mapper::{settings_to_toml, toml_to_settings};

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the per-user config directory, falling back to the
    /// working directory when no home directory can be resolved.
    pub fn from_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "RustCalendar", "RecurringCalendar") {
            dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!(
                "No settings file at {}; using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        toml_to_settings(&text, &self.path)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let text = settings_to_toml(settings)?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        let default_settings = Settings::default();
        self.update(&default_settings)
    }
}
