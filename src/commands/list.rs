use anyhow::Result;
use openin::{config::Config, editor::EditorProfile, probe};

/// Print every supported editor with its live availability. Probed fresh
/// on each call, like the menu construction it mirrors.
pub fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    for profile in EditorProfile::all(&config) {
        let state = if probe::is_available(&profile, config.probe.timeout) {
            "available"
        } else {
            "not available"
        };
        println!(
            "{:<6} {:<12} {state}",
            profile.kind.name(),
            profile.display_name
        );
    }
    Ok(())
}
