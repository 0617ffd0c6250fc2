//! One module per CLI subcommand.

pub mod config;
pub mod integrate;
pub mod list;
pub mod open;
pub mod setup;
