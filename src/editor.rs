//! The editors this tool knows how to launch.

use crate::config::Config;

/// The closed set of supported editors.
///
/// Each variant carries its launch defaults as data; adding an editor means
/// adding a variant and its rows in the match arms below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// Visual Studio Code.
    Code,
    /// Kiro.
    Kiro,
}

impl EditorKind {
    /// Every supported editor, in menu order.
    pub const ALL: [Self; 2] = [Self::Code, Self::Kiro];

    /// The name used for `--editor` and in configuration keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Kiro => "kiro",
        }
    }

    /// Default executable looked up on PATH.
    #[must_use]
    pub(crate) const fn default_command(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Kiro => "kiro",
        }
    }

    /// Default name shown in menu entries and notifications.
    #[must_use]
    pub(crate) const fn default_display_name(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Kiro => "Kiro",
        }
    }

    /// Flag that forces a new window when a directory is opened.
    /// Kiro opens directories in fresh windows on its own, so it has none.
    #[must_use]
    pub(crate) const fn new_window_flag(self) -> Option<&'static str> {
        match self {
            Self::Code => Some("--new-window"),
            Self::Kiro => None,
        }
    }

    /// Parse an editor name as accepted by `--editor` (case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| name.eq_ignore_ascii_case(kind.name()))
    }
}

impl std::fmt::Display for EditorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Launch description for one editor: the variant's defaults overlaid with
/// any configuration overrides. Immutable once built.
#[derive(Debug, Clone)]
pub struct EditorProfile {
    /// Which editor this profile describes.
    pub kind: EditorKind,
    /// Executable name or path used to launch the editor.
    pub command: String,
    /// Name shown in notifications and menu entries.
    pub display_name: String,
    /// New-window flag appended when opening a directory, if the editor has one.
    pub new_window_flag: Option<&'static str>,
}

impl EditorProfile {
    /// Build the profile for `kind` from `config`. Entry fields left empty
    /// by a partial config table fall back to the variant's defaults.
    #[must_use]
    pub fn from_config(kind: EditorKind, config: &Config) -> Self {
        let entry = config.editor(kind);
        Self {
            kind,
            command: or_default(&entry.command, kind.default_command()),
            display_name: or_default(&entry.display_name, kind.default_display_name()),
            new_window_flag: kind.new_window_flag(),
        }
    }

    /// Profiles for every supported editor, in menu order.
    #[must_use]
    pub fn all(config: &Config) -> Vec<Self> {
        EditorKind::ALL
            .into_iter()
            .map(|kind| Self::from_config(kind, config))
            .collect()
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
