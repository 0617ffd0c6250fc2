//! Availability probing for editor executables.

use std::process::{Command, Stdio};
use std::time::Duration;

use crate::editor::EditorProfile;
use crate::exec;

/// Capability flags tried in order; some editors reject `--version` but
/// still answer `--help`.
const PROBE_FLAGS: [&str; 2] = ["--version", "--help"];

enum ProbeResult {
    Ok,
    NonZeroExit,
    Failed,
}

/// Check that the profile's executable is installed and actually runs.
///
/// A PATH hit alone can be a stale or broken shim, so it is confirmed by
/// invoking the executable with a capability flag under `timeout`. Any
/// lookup miss, spawn failure, timeout, or non-zero exit on every flag
/// degrades to `false`; this never panics or errors.
///
/// Deliberately uncached: the menu must reflect the system as it is now.
#[must_use]
pub fn is_available(profile: &EditorProfile, timeout: Duration) -> bool {
    if which::which(&profile.command).is_err() {
        return false;
    }
    for flag in PROBE_FLAGS {
        match probe_flag(&profile.command, flag, timeout) {
            ProbeResult::Ok => return true,
            // The flag is unsupported; the next one may still answer.
            ProbeResult::NonZeroExit => {}
            ProbeResult::Failed => return false,
        }
    }
    false
}

fn probe_flag(command: &str, flag: &str, timeout: Duration) -> ProbeResult {
    let child = Command::new(command)
        .arg(flag)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    let Ok(mut child) = child else {
        return ProbeResult::Failed;
    };
    match exec::wait_with_timeout(&mut child, timeout) {
        Ok(Some(status)) if status.success() => ProbeResult::Ok,
        Ok(Some(_)) => ProbeResult::NonZeroExit,
        Ok(None) => {
            // Timed out; don't leave the probe child behind.
            let _ = child.kill();
            let _ = child.wait();
            ProbeResult::Failed
        }
        Err(_) => ProbeResult::Failed,
    }
}
