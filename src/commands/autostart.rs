use anyhow::Result;
use clap::{Args, Subcommand};

use crate::libs::autostart;
use crate::libs::messages::Message;
use crate::msg_info;

#[derive(Debug, Args)]
pub struct AutostartArgs {
    #[command(subcommand)]
    command: AutostartCommand,
}

#[derive(Debug, Subcommand)]
enum AutostartCommand {
    #[command(about = "Register the watcher to start on login")]
    Enable,
    #[command(about = "Remove the startup registration")]
    Disable,
    #[command(about = "Show whether autostart is registered")]
    Status,
}

pub fn cmd(args: AutostartArgs) -> Result<()> {
    match args.command {
        AutostartCommand::Enable => autostart::enable(),
        AutostartCommand::Disable => autostart::disable(),
        AutostartCommand::Status => {
            let status = autostart::status()?;
            msg_info!(Message::AutostartStatus(status));
            Ok(())
        }
    }
}
