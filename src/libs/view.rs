//! Terminal table rendering for tasks and shortcuts.

use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

use super::engine::{self, ButtonState, TaskStatus};
use super::formatter::{format_duration, format_optional_timestamp, format_progress};
use super::shortcut::WebShortcut;
use super::task::ManagedTask;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[(&ManagedTask, TaskStatus, Option<u8>)], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "STATUS", "CYCLE", "LAST COMPLETED", "PROGRESS", "DUE IN"]);
        for (task, status, progress) in tasks {
            table.add_row(row![
                task.name,
                status_label(*status),
                cycle_label(task),
                format_optional_timestamp(&task.last_played_timestamp),
                format_progress(*progress),
                due_in_label(task, now)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn shortcuts(shortcuts: &[(&WebShortcut, ButtonState)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "URL", "REFRESH", "STATE", "LAST USED"]);
        for (shortcut, state) in shortcuts {
            table.add_row(row![
                shortcut.name,
                shortcut.url,
                shortcut.refresh_time.as_deref().unwrap_or("-"),
                button_label(*state),
                format_optional_timestamp(&shortcut.last_reset_timestamp)
            ]);
        }
        table.printstd();

        Ok(())
    }
}

fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Running => "RUNNING",
        TaskStatus::Completed => "COMPLETED",
        TaskStatus::Incomplete => "INCOMPLETE",
    }
}

fn button_label(state: ButtonState) -> &'static str {
    match state {
        ButtonState::Red => "RED",
        ButtonState::Green => "GREEN",
        ButtonState::Default => "-",
    }
}

fn due_in_label(task: &ManagedTask, now: NaiveDateTime) -> String {
    match engine::next_cycle_boundary(task, now) {
        Some(boundary) if boundary > now => format_duration(&(boundary - now)),
        _ => "-".to_string(),
    }
}

fn cycle_label(task: &ManagedTask) -> String {
    if let Some(reset) = &task.server_reset_time {
        return format!("daily @ {}", reset);
    }
    if let Some(hours) = task.user_cycle_hours {
        return format!("every {}h", hours);
    }
    "-".to_string()
}
