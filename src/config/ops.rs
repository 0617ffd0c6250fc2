use anyhow::{Context, Result};
use std::path::PathBuf;

use super::Config;
use crate::editor::EditorKind;

impl Config {
    /// Location of the configuration file.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("openin").join("config.toml"))
    }

    /// Read the configuration from disk, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration to disk, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "open.always_new_window" => Ok(self.open.always_new_window.to_string()),
            "probe.timeout" => Ok(humantime::format_duration(self.probe.timeout).to_string()),
            "probe.fallback_timeout" => {
                Ok(humantime::format_duration(self.probe.fallback_timeout).to_string())
            }
            _ => {
                let (kind, field) = editor_key(key)?;
                let entry = self.editor(kind);
                match field {
                    "command" => Ok(entry.command.clone()),
                    "display_name" => Ok(entry.display_name.clone()),
                    _ => anyhow::bail!("Unknown config key: {key}"),
                }
            }
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "open.always_new_window" => {
                self.open.always_new_window = value
                    .parse::<bool>()
                    .with_context(|| format!("Invalid boolean value: {value}"))?;
            }
            "probe.timeout" => {
                self.probe.timeout = humantime::parse_duration(value)
                    .with_context(|| format!("Invalid duration value: {value}"))?;
            }
            "probe.fallback_timeout" => {
                self.probe.fallback_timeout = humantime::parse_duration(value)
                    .with_context(|| format!("Invalid duration value: {value}"))?;
            }
            _ => {
                let (kind, field) = editor_key(key)?;
                let entry = self.editor_mut(kind);
                match field {
                    "command" => entry.command = value.to_string(),
                    "display_name" => entry.display_name = value.to_string(),
                    _ => anyhow::bail!("Unknown config key: {key}"),
                }
            }
        }
        Ok(())
    }
}

/// Split an `editors.<name>.<field>` key into the editor kind and field name.
fn editor_key(key: &str) -> Result<(EditorKind, &str)> {
    let rest = key
        .strip_prefix("editors.")
        .with_context(|| format!("Unknown config key: {key}"))?;
    let (name, field) = rest
        .split_once('.')
        .with_context(|| format!("Unknown config key: {key}"))?;
    let kind = EditorKind::parse(name)
        .with_context(|| format!("Unknown editor in config key: {name}"))?;
    Ok((kind, field))
}
