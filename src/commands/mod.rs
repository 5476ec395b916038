pub mod autostart;
pub mod init;
pub mod launch;
pub mod settings;
pub mod shortcut;
pub mod status;
pub mod task;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage recurring game tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage web shortcuts")]
    Shortcut(shortcut::ShortcutArgs),
    #[command(about = "Launch a task's program")]
    Launch(launch::LaunchArgs),
    #[command(about = "Show the current state of all tasks and shortcuts")]
    Status,
    #[command(about = "Edit global settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Watch processes and send due notifications")]
    Watch(watch::WatchArgs),
    #[command(about = "Manage startup registration")]
    Autostart(autostart::AutostartArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Shortcut(args) => shortcut::cmd(args),
            Commands::Launch(args) => launch::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Autostart(args) => autostart::cmd(args),
        }
    }
}
