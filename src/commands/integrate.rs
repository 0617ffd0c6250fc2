use anyhow::Result;
use clap::Subcommand;
use openin::integration;

#[derive(Subcommand)]
pub enum IntegrateAction {
    /// Install the context menu entries for all supported editors
    Install,
    /// Remove the context menu entries
    Uninstall,
    /// Check whether the context menu entries are installed
    Status,
}

pub fn cmd_integrate(action: IntegrateAction) -> Result<()> {
    match action {
        IntegrateAction::Install => {
            integration::install()?;
            println!("{}", integration::status()?);
        }
        IntegrateAction::Uninstall => integration::uninstall()?,
        IntegrateAction::Status => println!("{}", integration::status()?),
    }
    Ok(())
}
