use anyhow::Result;
use openin::{config::Config, editor::EditorProfile, integration, probe};

pub fn cmd_setup() -> Result<()> {
    let config_path = Config::path()?;
    let already_existed = config_path.exists();
    let config = Config::load()?;

    eprintln!("Probing for supported editors:");
    let mut found_any = false;
    for profile in EditorProfile::all(&config) {
        if probe::is_available(&profile, config.probe.timeout) {
            eprintln!("  {} found ({})", profile.display_name, profile.command);
            found_any = true;
        } else {
            eprintln!("  {} not found", profile.display_name);
        }
    }
    if !found_any {
        eprintln!("No supported editor found; the menu entries will say so when used.");
    }

    config.save()?;
    if already_existed {
        eprintln!("Updated config at {}", config_path.display());
    } else {
        eprintln!("Created config at {}", config_path.display());
    }

    // Menu entries are a convenience; a failure here should not abort setup
    match integration::install() {
        Ok(()) => eprintln!("Installed file manager menu entries."),
        Err(e) => eprintln!("Warning: could not install file manager menu entries: {e}"),
    }

    eprintln!("\nSetup complete! Right-click a file and pick Scripts > Open in Code.");
    Ok(())
}
