//! Best-effort user-facing messages.
//!
//! Launch problems must reach the user who clicked the menu entry, not a
//! terminal they may not have open. Messages go through `notify-send`
//! when possible and fall back to stderr, and sending never fails.

use std::process::{Command, Stdio};

const ERROR_TITLE: &str = "openin error";
const INFO_TITLE: &str = "openin";

/// Sink for user-facing messages. Implementations must not fail or panic.
pub trait Notifier {
    /// Report a failure the user should act on.
    fn error(&self, message: &str);
    /// Report progress or a partial problem.
    fn info(&self, message: &str);
}

/// [`Notifier`] backed by the desktop notification service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn send(title: &str, message: &str) -> bool {
        Command::new("notify-send")
            .arg(title)
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .is_ok()
    }
}

impl Notifier for DesktopNotifier {
    fn error(&self, message: &str) {
        if !Self::send(ERROR_TITLE, message) {
            eprintln!("{ERROR_TITLE}: {message}");
        }
    }

    fn info(&self, message: &str) {
        if !Self::send(INFO_TITLE, message) {
            eprintln!("{INFO_TITLE}: {message}");
        }
    }
}
