//! The launch workflow behind a menu activation: re-probe, validate the
//! selection, compose the command, spawn the editor detached, and fall
//! back to one bounded foreground attempt before giving up.


use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::compose;
use crate::config::Config;
use crate::editor::EditorProfile;
use crate::exec;
use crate::notify::Notifier;
use crate::probe;

/// How long a detached launch is watched for an immediate failure before
/// it is considered running.
const EARLY_EXIT_GRACE: Duration = Duration::from_millis(250);

/// How many invalid paths are spelled out in the skip notification.
const SHOWN_INVALID_PATHS: usize = 3;

/// How a launch attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The detached editor process started normally.
    Launched,
    /// The detached attempt failed but the foreground retry exited cleanly.
    LaunchedViaFallback,
    /// The foreground retry outlived its timeout. The editor is probably
    /// still starting, so this counts as success.
    TentativelyLaunched,
    /// Nothing was launched.
    Failed(FailureKind),
}

/// Why a launch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The editor executable is missing or does not run.
    NotAvailable,
    /// Every selected path was missing or unreadable.
    AllPathsInvalid,
    /// The command could not be spawned in either mode.
    LaunchFailed,
    /// The fallback attempt ran but reported failure.
    FallbackFailed,
    /// Anything not covered above; carries a diagnostic.
    Unexpected(String),
}

/// Per-launch knobs, usually derived from [`Config`] plus CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct LaunchOptions {
    /// Always pass the editor's new-window flag.
    pub always_new_window: bool,
    /// Availability probe timeout.
    pub probe_timeout: Duration,
    /// Foreground fallback timeout.
    pub fallback_timeout: Duration,
}

impl From<&Config> for LaunchOptions {
    fn from(config: &Config) -> Self {
        Self {
            always_new_window: config.open.always_new_window,
            probe_timeout: config.probe.timeout,
            fallback_timeout: config.probe.fallback_timeout,
        }
    }
}

/// The selection split into usable and skipped paths, in selection order.
#[derive(Debug, Default)]
pub struct PathValidationResult {
    /// Paths that exist and are readable.
    pub valid: Vec<String>,
    /// Paths that were skipped, with the reason.
    pub invalid: Vec<(String, String)>,
}

/// Check that each selected path exists and is readable.
#[must_use]
pub fn validate_paths(paths: &[String]) -> PathValidationResult {
    let mut result = PathValidationResult::default();
    for raw in paths {
        match check_path(raw) {
            Ok(()) => result.valid.push(raw.clone()),
            Err(reason) => result.invalid.push((raw.clone(), reason)),
        }
    }
    result
}

fn check_path(raw: &str) -> Result<(), String> {
    let path = Path::new(raw);
    let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => "does not exist".to_string(),
        std::io::ErrorKind::PermissionDenied => "no read permission".to_string(),
        _ => e.to_string(),
    })?;
    let readable = if meta.is_dir() {
        std::fs::read_dir(path).is_ok()
    } else {
        std::fs::File::open(path).is_ok()
    };
    if readable {
        Ok(())
    } else {
        Err("no read permission".to_string())
    }
}

/// Launch `profile` on `paths`.
///
/// Partial selection problems are reported through `notifier` from here
/// (they are not part of the outcome); the caller turns the returned
/// [`LaunchOutcome`] into the final user-facing notification. This never
/// panics and never returns an error: internal failures surface as
/// [`FailureKind::Unexpected`].
pub fn launch(
    profile: &EditorProfile,
    paths: &[String],
    options: &LaunchOptions,
    notifier: &dyn Notifier,
) -> LaunchOutcome {
    match try_launch(profile, paths, options, notifier) {
        Ok(outcome) => outcome,
        Err(e) => LaunchOutcome::Failed(FailureKind::Unexpected(format!("{e:#}"))),
    }
}

fn try_launch(
    profile: &EditorProfile,
    paths: &[String],
    options: &LaunchOptions,
    notifier: &dyn Notifier,
) -> Result<LaunchOutcome> {
    // The menu was built from an earlier probe; the editor may have been
    // uninstalled since.
    if !probe::is_available(profile, options.probe_timeout) {
        return Ok(LaunchOutcome::Failed(FailureKind::NotAvailable));
    }

    let checked = validate_paths(paths);
    if checked.valid.is_empty() {
        return Ok(LaunchOutcome::Failed(FailureKind::AllPathsInvalid));
    }
    if !checked.invalid.is_empty() {
        notifier.info(&skipped_message(&checked.invalid));
    }

    let targets_directory = checked.valid.iter().any(|p| Path::new(p).is_dir());
    let command = compose::compose(
        profile,
        &checked.valid,
        targets_directory,
        options.always_new_window,
    )?;
    let argv = shlex::split(&command)
        .with_context(|| format!("Composed command does not parse: {command}"))?;

    if spawn_detached(&argv).is_ok() {
        return Ok(LaunchOutcome::Launched);
    }
    Ok(fallback_launch(&argv, options.fallback_timeout))
}

/// Spawn the editor detached from this process. An exit within the grace
/// window with a non-zero status counts as a failed launch.
fn spawn_detached(argv: &[String]) -> Result<()> {
    let (program, args) = argv.split_first().context("Empty command")?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;
    match exec::wait_with_timeout(&mut child, EARLY_EXIT_GRACE)? {
        Some(status) if !status.success() => anyhow::bail!("{program} exited with {status}"),
        // Still running (now detached) or a clean immediate exit, as forked
        // editor launchers do.
        _ => Ok(()),
    }
}

/// The single foreground retry, with captured stderr and a bounded wait.
/// A timeout leaves the child running: slow startup is not failure.
fn fallback_launch(argv: &[String], timeout: Duration) -> LaunchOutcome {
    let Some((program, args)) = argv.split_first() else {
        return LaunchOutcome::Failed(FailureKind::LaunchFailed);
    };
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn();
    let Ok(mut child) = child else {
        return LaunchOutcome::Failed(FailureKind::LaunchFailed);
    };
    // Drain stderr concurrently: a child filling the pipe buffer would
    // otherwise never exit and be mistaken for a slow startup.
    let stderr_reader = child.stderr.take().map(|mut pipe| {
        std::thread::spawn(move || {
            let mut buf = String::new();
            let _ = pipe.read_to_string(&mut buf);
            buf
        })
    });
    match exec::wait_with_timeout(&mut child, timeout) {
        Ok(Some(status)) if status.success() => LaunchOutcome::LaunchedViaFallback,
        Ok(Some(status)) => {
            let stderr = stderr_reader
                .and_then(|reader| reader.join().ok())
                .unwrap_or_default();
            let stderr = stderr.trim();
            if stderr.is_empty() {
                eprintln!("Warning: fallback launch of {program} failed ({status})");
            } else {
                eprintln!("Warning: fallback launch of {program} failed ({status}): {stderr}");
            }
            LaunchOutcome::Failed(FailureKind::FallbackFailed)
        }
        Ok(None) => LaunchOutcome::TentativelyLaunched,
        Err(_) => LaunchOutcome::Failed(FailureKind::LaunchFailed),
    }
}

fn skipped_message(invalid: &[(String, String)]) -> String {
    let shown: Vec<String> = invalid
        .iter()
        .take(SHOWN_INVALID_PATHS)
        .map(|(path, reason)| format!("{path} ({reason})"))
        .collect();
    let mut message = format!("Skipping invalid paths: {}", shown.join(", "));
    if invalid.len() > SHOWN_INVALID_PATHS {
        use std::fmt::Write;
        let _ = write!(message, " and {} more", invalid.len() - SHOWN_INVALID_PATHS);
    }
    message
}

/// Turn a finished launch into the final user-facing notification.
///
/// The happy path stays quiet; every other outcome produces exactly one
/// notification. Kept result-driven so callers (and tests) see the whole
/// decision in one place.
pub fn report(outcome: &LaunchOutcome, profile: &EditorProfile, notifier: &dyn Notifier) {
    let name = &profile.display_name;
    match outcome {
        LaunchOutcome::Launched => {}
        LaunchOutcome::LaunchedViaFallback => {
            notifier.info(&format!("Launched {name} using the fallback method"));
        }
        LaunchOutcome::TentativelyLaunched => {
            notifier.info(&format!("Launched {name} (startup took longer than expected)"));
        }
        LaunchOutcome::Failed(kind) => notifier.error(&failure_message(kind, name)),
    }
}

fn failure_message(kind: &FailureKind, name: &str) -> String {
    match kind {
        FailureKind::NotAvailable => format!(
            "{name} is not available on this system. Install {name} to use this menu entry."
        ),
        FailureKind::AllPathsInvalid => {
            "Cannot open the selection: all paths are invalid or unreadable".to_string()
        }
        FailureKind::LaunchFailed | FailureKind::FallbackFailed => {
            format!("Failed to launch {name}. Check that it is installed and runnable.")
        }
        FailureKind::Unexpected(detail) => {
            format!("Unexpected error launching {name}: {detail}")
        }
    }
}
