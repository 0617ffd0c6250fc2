use anyhow::{Context, Result};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use super::IntegrationStatus;
use crate::config::Config;
use crate::editor::EditorProfile;

/// GNOME Files (Nautilus) picks up user scripts from this directory and
/// shows them under the Scripts submenu of the context menu.
fn scripts_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine the user data directory")?;
    Ok(data.join("nautilus").join("scripts"))
}

/// Marker comment identifying scripts written by us. Uninstall matches on
/// this rather than on entry names, which change with `display_name`.
const MARKER: &str = "Installed by openin";

fn entry_name(profile: &EditorProfile) -> String {
    format!("Open in {}", profile.display_name)
}

/// Script body for one editor. Selected files arrive as arguments; with
/// nothing selected (folder background) Nautilus runs the script in the
/// current folder, so the selection falls back to `$PWD`.
fn script_body(exe: &str, editor_name: &str) -> String {
    format!(
        "#!/bin/sh\n\
         # {MARKER}; `openin integrate uninstall` removes this.\n\
         if [ \"$#\" -eq 0 ]; then\n\
         \tset -- \"$PWD\"\n\
         fi\n\
         exec {exe} open --editor {editor_name} \"$@\"\n"
    )
}

pub fn install() -> Result<()> {
    let exe = std::env::current_exe().context("Failed to get current executable path")?;
    let exe = exe
        .to_str()
        .context("Executable path contains non-UTF-8 characters")?;
    let exe = shlex::try_quote(exe)
        .context("Executable path cannot be placed on a command line")?;
    install_into(&scripts_dir()?, exe.as_ref(), &Config::load()?)
}

fn install_into(dir: &Path, exe: &str, config: &Config) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    for profile in EditorProfile::all(config) {
        let path = dir.join(entry_name(&profile));
        let body = script_body(exe, profile.kind.name());
        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to mark {} executable", path.display()))?;
    }
    Ok(())
}

pub fn uninstall() -> Result<()> {
    uninstall_from(&scripts_dir()?)
}

fn uninstall_from(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read {}", dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        // Other user scripts live here too; only remove what we wrote.
        let Ok(body) = std::fs::read_to_string(&path) else {
            continue;
        };
        if body.contains(MARKER) {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }
    Ok(())
}

pub fn status() -> Result<IntegrationStatus> {
    status_of(&scripts_dir()?, &Config::load()?)
}

fn status_of(dir: &Path, config: &Config) -> Result<IntegrationStatus> {
    let entries: Vec<String> = EditorProfile::all(config)
        .iter()
        .map(entry_name)
        .filter(|name| dir.join(name).exists())
        .collect();
    if entries.is_empty() {
        Ok(IntegrationStatus::NotInstalled)
    } else {
        Ok(IntegrationStatus::Installed {
            dir: dir.display().to_string(),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_writes_one_executable_script_per_editor() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        install_into(dir.path(), "/usr/local/bin/openin", &config).unwrap();

        let code_script = dir.path().join("Open in Code");
        let kiro_script = dir.path().join("Open in Kiro");
        assert!(code_script.exists());
        assert!(kiro_script.exists());

        let body = std::fs::read_to_string(&code_script).unwrap();
        assert!(body.starts_with("#!/bin/sh"));
        assert!(body.contains("open --editor code \"$@\""));
        assert!(body.contains("$PWD"));

        let mode = std::fs::metadata(&code_script).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_status_reflects_installed_entries() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();

        assert_eq!(
            status_of(dir.path(), &config).unwrap(),
            IntegrationStatus::NotInstalled
        );

        install_into(dir.path(), "openin", &config).unwrap();
        match status_of(dir.path(), &config).unwrap() {
            IntegrationStatus::Installed { entries, .. } => {
                assert_eq!(entries, vec!["Open in Code", "Open in Kiro"]);
            }
            IntegrationStatus::NotInstalled => panic!("expected installed"),
        }
    }

    #[test]
    fn test_uninstall_removes_renamed_entries_but_not_foreign_scripts() {
        let dir = tempfile::tempdir().unwrap();
        install_into(dir.path(), "openin", &Config::default()).unwrap();

        // Renaming after install leaves the old entry name behind.
        let mut config = Config::default();
        config.editors.code.display_name = "VS Code".to_string();
        install_into(dir.path(), "openin", &config).unwrap();
        assert!(dir.path().join("Open in Code").exists());
        assert!(dir.path().join("Open in VS Code").exists());

        let foreign = dir.path().join("Compress here");
        std::fs::write(&foreign, "#!/bin/sh\ntar czf selection.tar.gz \"$@\"\n").unwrap();

        uninstall_from(dir.path()).unwrap();
        assert!(!dir.path().join("Open in Code").exists());
        assert!(!dir.path().join("Open in VS Code").exists());
        assert!(!dir.path().join("Open in Kiro").exists());
        assert!(foreign.exists());
    }

    #[test]
    fn test_display_name_override_changes_entry_name() {
        let mut config = Config::default();
        config.editors.code.display_name = "VS Code".to_string();
        let dir = tempfile::tempdir().unwrap();
        install_into(dir.path(), "openin", &config).unwrap();
        assert!(dir.path().join("Open in VS Code").exists());
    }
}
