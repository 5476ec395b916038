use anyhow::Result;
use clap::Args;

use crate::libs::daemon;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watcher instead of starting one
    #[arg(long)]
    stop: bool,
    /// Run the tick loop in this terminal instead of detaching
    #[arg(long)]
    foreground: bool,
}

/// Starts, stops, or foregrounds the watch daemon.
pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }
    if args.foreground {
        return daemon::run_with_signal_handling().await;
    }
    daemon::spawn()
}
