use anyhow::Result;
use clap::Args;

use crate::libs::launcher;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_success};

#[derive(Debug, Args)]
pub struct LaunchArgs {
    /// Name of the task to launch
    name: String,
}

/// Starts the program behind a task. Completion is still recorded by the
/// watcher when the process later stops.
pub fn cmd(args: LaunchArgs) -> Result<()> {
    let store = TaskStore::load()?;
    let task = match store.find_task_by_name(&args.name) {
        Some(task) => task,
        None => msg_bail_anyhow!(Message::TaskNotFound(args.name)),
    };

    launcher::launch_task(task, &store.settings)?;
    msg_success!(Message::LaunchedTask(args.name));
    Ok(())
}
