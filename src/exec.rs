//! Bounded waiting on child processes.

use anyhow::Result;
use std::process::{Child, ExitStatus};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wait for `child` to exit, giving up after `timeout`.
///
/// Returns `Ok(None)` on timeout; the child is left running and it is the
/// caller's choice whether to kill it or let it keep starting up.
pub fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
