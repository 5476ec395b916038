//! Task management subcommands.
//!
//! `add` without flags runs an interactive wizard; with flags it is
//! fully scriptable. `edit` takes the task name plus the fields to
//! change, where an empty string clears an optional field. `done`
//! records a manual completion, equivalent to a monitored process
//! stopping.

use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::libs::engine::{self, parse_time_of_day};
use crate::libs::liveness::{ProcessProbe, SystemProbe};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::ManagedTask;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success, msg_warning};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    #[command(about = "Add a task (interactive when no name is given)")]
    Add(AddArgs),
    #[command(about = "Edit a task's fields")]
    Edit(EditArgs),
    #[command(about = "Delete a task")]
    Delete(NameArg),
    #[command(about = "List tasks with their current status")]
    List,
    #[command(about = "Mark a task completed now")]
    Done(NameArg),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Task name
    name: Option<String>,
    /// Path of the executable to monitor
    #[arg(long)]
    path: Option<String>,
    /// Path used to launch the task
    #[arg(long)]
    launch_path: Option<String>,
    /// Daily server reset time (HH:MM)
    #[arg(long)]
    reset_time: Option<String>,
    /// Rolling cycle length in hours
    #[arg(long)]
    cycle_hours: Option<u32>,
    /// Mandatory check-in time (HH:MM), repeatable
    #[arg(long = "mandatory")]
    mandatory_times: Vec<String>,
    /// Enforce the mandatory check-in times
    #[arg(long)]
    mandatory_enabled: bool,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Name of the task to edit
    name: String,
    /// New task name
    #[arg(long)]
    rename: Option<String>,
    /// Path of the executable to monitor (empty string clears)
    #[arg(long)]
    path: Option<String>,
    /// Path used to launch the task (empty string clears)
    #[arg(long)]
    launch_path: Option<String>,
    /// Daily server reset time, HH:MM (empty string clears)
    #[arg(long)]
    reset_time: Option<String>,
    /// Rolling cycle length in hours (0 clears)
    #[arg(long)]
    cycle_hours: Option<u32>,
    /// Replacement mandatory check-in times, repeatable
    #[arg(long = "mandatory")]
    mandatory_times: Vec<String>,
    /// Enforce (or stop enforcing) the mandatory check-in times
    #[arg(long)]
    mandatory_enabled: Option<bool>,
}

#[derive(Debug, Args)]
struct NameArg {
    /// Task name
    name: String,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add(add) => cmd_add(add),
        TaskCommand::Edit(edit) => cmd_edit(edit),
        TaskCommand::Delete(arg) => cmd_delete(arg),
        TaskCommand::List => cmd_list(),
        TaskCommand::Done(arg) => cmd_done(arg),
    }
}

fn cmd_add(mut args: AddArgs) -> Result<()> {
    let mut store = TaskStore::load()?;

    let task = match args.name.take() {
        Some(name) => build_from_flags(name, args)?,
        None => build_interactive()?,
    };

    let name = task.name.clone();
    if store.add_task(task) {
        msg_success!(Message::TaskCreated(name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn build_from_flags(name: String, args: AddArgs) -> Result<ManagedTask> {
    let mut task = ManagedTask::new(&name, args.path.as_deref().unwrap_or(""));
    task.launch_path = args.launch_path.filter(|p| !p.is_empty());
    task.server_reset_time = validate_optional_time(args.reset_time)?;
    task.user_cycle_hours = args.cycle_hours.filter(|hours| *hours > 0);
    task.mandatory_times = validate_times(args.mandatory_times)?;
    task.is_mandatory_time_enabled = args.mandatory_enabled;
    Ok(task)
}

fn build_interactive() -> Result<ManagedTask> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme).with_prompt(Message::PromptTaskName.to_string()).interact_text()?;
    let path: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptMonitoringPath.to_string())
        .allow_empty(true)
        .interact_text()?;

    let mut task = ManagedTask::new(&name, &path);

    let launch_path: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptLaunchPath.to_string())
        .allow_empty(true)
        .interact_text()?;
    task.launch_path = Some(launch_path).filter(|p| !p.is_empty());

    let reset_time: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptServerResetTime.to_string())
        .allow_empty(true)
        .interact_text()?;
    task.server_reset_time = validate_optional_time(Some(reset_time))?;

    // A daily reset takes precedence, so only offer a rolling cycle when
    // no reset time was given.
    if task.server_reset_time.is_none() {
        let hours: u32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptUserCycleHours.to_string())
            .default(0)
            .interact_text()?;
        task.user_cycle_hours = Some(hours).filter(|h| *h > 0);
    }

    let mandatory: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptMandatoryTimes.to_string())
        .allow_empty(true)
        .interact_text()?;
    let times: Vec<String> = mandatory
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect();
    task.mandatory_times = validate_times(times)?;

    if !task.mandatory_times.is_empty() {
        task.is_mandatory_time_enabled = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptMandatoryEnabled.to_string())
            .default(true)
            .interact()?;
    }

    Ok(task)
}

fn cmd_edit(args: EditArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    let mut task = match store.find_task_by_name(&args.name) {
        Some(task) => task.clone(),
        None => msg_bail_anyhow!(Message::TaskNotFound(args.name)),
    };

    let mut changed = false;
    if let Some(rename) = args.rename {
        task.name = rename;
        changed = true;
    }
    if let Some(path) = args.path {
        task.monitoring_path = path;
        changed = true;
    }
    if let Some(launch_path) = args.launch_path {
        task.launch_path = Some(launch_path).filter(|p| !p.is_empty());
        changed = true;
    }
    if let Some(reset_time) = args.reset_time {
        task.server_reset_time = if reset_time.is_empty() {
            None
        } else {
            validate_optional_time(Some(reset_time))?
        };
        changed = true;
    }
    if let Some(hours) = args.cycle_hours {
        task.user_cycle_hours = Some(hours).filter(|h| *h > 0);
        changed = true;
    }
    if !args.mandatory_times.is_empty() {
        task.mandatory_times = validate_times(args.mandatory_times)?;
        changed = true;
    }
    if let Some(enabled) = args.mandatory_enabled {
        task.is_mandatory_time_enabled = enabled;
        changed = true;
    }

    if !changed {
        msg_print!(Message::NoChangesDetected);
        return Ok(());
    }

    let name = task.name.clone();
    if store.update_task(task) {
        msg_success!(Message::TaskUpdated(name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn cmd_delete(args: NameArg) -> Result<()> {
    let mut store = TaskStore::load()?;
    let id = match store.find_task_by_name(&args.name) {
        Some(task) => task.id.clone(),
        None => msg_bail_anyhow!(Message::TaskNotFound(args.name)),
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(args.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if store.remove_task(&id) {
        msg_success!(Message::TaskDeleted(args.name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn cmd_list() -> Result<()> {
    let store = TaskStore::load()?;
    if store.tasks.is_empty() {
        msg_print!(Message::TasksEmpty);
        return Ok(());
    }

    let mut probe = SystemProbe::new();
    probe.refresh();
    let now = Local::now().naive_local();

    let rows: Vec<_> = store
        .tasks
        .iter()
        .map(|task| {
            let running = !task.monitoring_path.is_empty() && probe.is_process_running(&task.monitoring_path);
            let status = engine::determine_task_status(task, running, now);
            let progress = engine::cycle_progress(task, now);
            (task, status, progress)
        })
        .collect();

    View::tasks(&rows, now)
}

fn cmd_done(args: NameArg) -> Result<()> {
    let mut store = TaskStore::load()?;
    let id = match store.find_task_by_name(&args.name) {
        Some(task) => task.id.clone(),
        None => msg_bail_anyhow!(Message::TaskNotFound(args.name)),
    };

    if store.touch_last_played(&id, Local::now()) {
        msg_success!(Message::TaskMarkedDone(args.name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn validate_optional_time(value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(value) if !value.is_empty() => {
            if parse_time_of_day(&value).is_none() {
                msg_bail_anyhow!(Message::InvalidTimeOfDay(value));
            }
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}

fn validate_times(values: Vec<String>) -> Result<Vec<String>> {
    for value in &values {
        if parse_time_of_day(value).is_none() {
            msg_bail_anyhow!(Message::InvalidTimeOfDay(value.clone()));
        }
    }
    Ok(values)
}
