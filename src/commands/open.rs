use anyhow::{Context, Result};
use openin::{
    config::Config,
    editor::{EditorKind, EditorProfile},
    launcher::{self, LaunchOptions},
    notify::{DesktopNotifier, Notifier},
};

/// The menu activation path. Launch failures are reported through the
/// notifier and still exit zero: the caller is a context menu script, and
/// a non-zero exit there helps nobody. Only caller misuse (an unknown
/// editor name) is a hard error.
pub fn cmd_open(paths: Vec<String>, editor: &str, new_window: bool) -> Result<()> {
    let kind = EditorKind::parse(editor)
        .with_context(|| format!("Unknown editor: {editor} (expected one of: code, kiro)"))?;
    let notifier = DesktopNotifier;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            notifier.error(&format!("Could not load configuration: {e:#}"));
            return Ok(());
        }
    };

    let paths = if paths.is_empty() {
        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        let cwd = cwd
            .to_str()
            .context("Current directory path contains non-UTF-8 characters")?;
        vec![cwd.to_string()]
    } else {
        paths
    };

    let profile = EditorProfile::from_config(kind, &config);
    let mut options = LaunchOptions::from(&config);
    if new_window {
        options.always_new_window = true;
    }

    let outcome = launcher::launch(&profile, &paths, &options, &notifier);
    launcher::report(&outcome, &profile, &notifier);
    Ok(())
}
