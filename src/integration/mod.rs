//! File manager context-menu integration.
//!
//! The menu entries themselves belong to the file manager; what we install
//! is one launcher script per editor in the place the file manager picks
//! them up from (GNOME Files user scripts on Linux). Each script hands the
//! selection to `openin open`.

use anyhow::Result;

#[cfg(target_os = "linux")]
mod linux;

/// Whether the context-menu entries are installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationStatus {
    /// At least one menu script is present.
    Installed {
        /// Directory the scripts live in.
        dir: String,
        /// Names of the installed entries.
        entries: Vec<String>,
    },
    /// No menu scripts found.
    NotInstalled,
}

impl std::fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Installed { dir, entries } => {
                write!(f, "Installed in {dir}: {}", entries.join(", "))
            }
            Self::NotInstalled => write!(f, "Not installed"),
        }
    }
}

/// Install one menu script per supported editor.
pub fn install() -> Result<()> {
    platform_install()
}

/// Remove the installed menu scripts.
pub fn uninstall() -> Result<()> {
    platform_uninstall()
}

/// Report which menu scripts are currently installed.
pub fn status() -> Result<IntegrationStatus> {
    platform_status()
}

#[cfg(target_os = "linux")]
fn platform_install() -> Result<()> {
    linux::install()
}

#[cfg(target_os = "linux")]
fn platform_uninstall() -> Result<()> {
    linux::uninstall()
}

#[cfg(target_os = "linux")]
fn platform_status() -> Result<IntegrationStatus> {
    linux::status()
}

#[cfg(not(target_os = "linux"))]
fn platform_install() -> Result<()> {
    anyhow::bail!("File manager integration is only supported on Linux")
}

#[cfg(not(target_os = "linux"))]
fn platform_uninstall() -> Result<()> {
    anyhow::bail!("File manager integration is only supported on Linux")
}

#[cfg(not(target_os = "linux"))]
fn platform_status() -> Result<IntegrationStatus> {
    Ok(IntegrationStatus::NotInstalled)
}
