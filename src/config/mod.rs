//! On-disk configuration (`~/.config/openin/config.toml`).

mod ops;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::editor::EditorKind;

/// Root of the configuration file. A missing file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Launch behavior.
    pub open: OpenConfig,
    /// Probe and fallback timeouts.
    pub probe: ProbeConfig,
    /// Per-editor command and display-name overrides.
    pub editors: EditorsConfig,
}

/// Launch behavior options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpenConfig {
    /// Pass the editor's new-window flag even when opening plain files.
    pub always_new_window: bool,
}

/// Timeouts bounding the availability probe and the foreground fallback
/// launch. Values use humantime syntax, e.g. `"3s"` or `"1500ms"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// How long a `--version`/`--help` probe may run.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// How long the foreground fallback launch may run.
    #[serde(with = "humantime_serde")]
    pub fallback_timeout: Duration,
}

/// Settings for each supported editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorsConfig {
    /// Visual Studio Code.
    pub code: EditorEntry,
    /// Kiro.
    pub kiro: EditorEntry,
}

/// Settings for a single editor. A field left out of a hand-edited table
/// deserializes empty; [`crate::editor::EditorProfile::from_config`] turns
/// empty fields back into the editor's built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorEntry {
    /// Executable name or absolute path.
    pub command: String,
    /// Name shown in notifications and menu entries.
    pub display_name: String,
}

impl EditorEntry {
    fn defaults_for(kind: EditorKind) -> Self {
        Self {
            command: kind.default_command().to_string(),
            display_name: kind.default_display_name().to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open: OpenConfig::default(),
            probe: ProbeConfig::default(),
            editors: EditorsConfig::default(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            fallback_timeout: Duration::from_secs(5),
        }
    }
}

impl Default for EditorsConfig {
    fn default() -> Self {
        Self {
            code: EditorEntry::defaults_for(EditorKind::Code),
            kiro: EditorEntry::defaults_for(EditorKind::Kiro),
        }
    }
}

impl Config {
    /// Look up the settings for `kind`.
    #[must_use]
    pub const fn editor(&self, kind: EditorKind) -> &EditorEntry {
        match kind {
            EditorKind::Code => &self.editors.code,
            EditorKind::Kiro => &self.editors.kiro,
        }
    }

    /// Mutable counterpart of [`Self::editor`].
    pub fn editor_mut(&mut self, kind: EditorKind) -> &mut EditorEntry {
        match kind {
            EditorKind::Code => &mut self.editors.code,
            EditorKind::Kiro => &mut self.editors.kiro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.open.always_new_window);
        assert_eq!(config.probe.timeout, Duration::from_secs(3));
        assert_eq!(config.probe.fallback_timeout, Duration::from_secs(5));
        assert_eq!(config.editors.code.command, "code");
        assert_eq!(config.editors.kiro.display_name, "Kiro");
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            "[open]\nalways_new_window = true\n\n[probe]\ntimeout = \"1500ms\"\nfallback_timeout = \"10s\"\n",
        )
        .unwrap();
        assert!(config.open.always_new_window);
        assert_eq!(config.probe.timeout, Duration::from_millis(1500));
        assert_eq!(config.probe.fallback_timeout, Duration::from_secs(10));
        // Untouched sections fall back to defaults
        assert_eq!(config.editors.code.command, "code");
    }

    #[test]
    fn test_partial_editor_table_parses() {
        // A hand-edited override of a single key must not reject the file.
        let config: Config =
            toml::from_str("[editors.code]\ncommand = \"/opt/vscode/bin/code\"\n").unwrap();
        assert_eq!(config.editors.code.command, "/opt/vscode/bin/code");
        assert_eq!(config.editors.code.display_name, "");
        assert_eq!(config.editors.kiro.command, "kiro");
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = Config::default();
        config.editors.kiro.command = "/usr/local/bin/kiro".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.editors.kiro.command, "/usr/local/bin/kiro");
        assert_eq!(parsed.probe.timeout, Duration::from_secs(3));
    }
}
