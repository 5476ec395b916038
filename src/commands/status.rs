use anyhow::Result;
use chrono::Local;

use crate::libs::engine;
use crate::libs::liveness::{ProcessProbe, SystemProbe};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::msg_print;

/// One-shot evaluation of every task and shortcut, rendered as tables.
pub fn cmd() -> Result<()> {
    let store = TaskStore::load()?;
    let now = Local::now().naive_local();

    if store.tasks.is_empty() && store.shortcuts.is_empty() {
        msg_print!(Message::TasksEmpty);
        return Ok(());
    }

    if !store.tasks.is_empty() {
        let mut probe = SystemProbe::new();
        probe.refresh();

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
        View::tasks(&rows, now)?;
    }

    if !store.shortcuts.is_empty() {
        let rows: Vec<_> = store
            .shortcuts
            .iter()
            .map(|shortcut| (shortcut, engine::determine_button_state(shortcut, now)))
            .collect();
        View::shortcuts(&rows)?;
    }

    Ok(())
}
