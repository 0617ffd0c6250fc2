//! Launch an external code editor on a file-manager selection.
//!
//! The binary built from this crate is wired into the file manager's
//! context menu (see [`integration`]); each activation probes whether the
//! editor is still installed, validates the selected paths, composes a
//! shell-safe command line, and spawns the editor detached, with one
//! bounded foreground retry and best-effort desktop notifications when
//! anything goes wrong.

pub mod compose;
pub mod config;
pub mod editor;
pub mod exec;
pub mod integration;
pub mod launcher;
pub mod notify;
pub mod probe;

pub use config::Config;
pub use editor::{EditorKind, EditorProfile};
pub use launcher::{FailureKind, LaunchOutcome};
