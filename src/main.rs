//! `openin` binary: launch VS Code or Kiro on a file-manager selection.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::config::ConfigAction;
use commands::integrate::IntegrateAction;

#[derive(Parser)]
#[command(
    name = "openin",
    about = "Open files and folders in VS Code or Kiro from your file manager"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch an editor on the given paths (current directory if none)
    Open {
        /// Paths to open; defaults to the current directory
        #[arg(value_name = "PATH")]
        paths: Vec<String>,

        /// Editor to use (code or kiro)
        #[arg(long, default_value = "code")]
        editor: String,

        /// Force the editor's new-window flag
        #[arg(long)]
        new_window: bool,
    },

    /// List supported editors and whether they are currently available
    List,

    /// Manage openin configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage the file manager context menu entries
    Integrate {
        #[command(subcommand)]
        action: IntegrateAction,
    },

    /// First-time setup: probe editors, write config, install menu entries
    Setup,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Open {
            paths,
            editor,
            new_window,
        } => commands::open::cmd_open(paths, &editor, new_window)?,

        Commands::List => commands::list::cmd_list()?,

        Commands::Config { action } => commands::config::cmd_config(action)?,

        Commands::Integrate { action } => commands::integrate::cmd_integrate(action)?,

        Commands::Setup => commands::setup::cmd_setup()?,
    }

    Ok(())
}
