use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

pub fn toml_to_settings(text: &str, path: &Path) -> Result<Settings> {
    let settings: Settings = toml::from_str(text)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;

    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

    Ok(settings)
}

pub fn settings_to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("failed to serialize settings")
}
