//! Process liveness monitoring.
//!
//! Each tick the monitor asks a `ProcessProbe` whether every monitored
//! executable is currently running and compares the answer with the
//! previous tick. A running-to-stopped edge is the moment a play session
//! ended, so it records a completion timestamp through the store. A
//! stopped-to-running edge only marks the tick as changed so the display
//! can flip to the running state.
//!
//! Probing never fails: a monitoring path that cannot be resolved simply
//! counts as "not running".

use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::path::Path;
use sysinfo::{ProcessesToUpdate, System};

use super::store::TaskStore;
use crate::msg_debug;

/// Source of process liveness answers.
///
/// The production implementation reads the system process table; tests
/// substitute a scripted probe.
pub trait ProcessProbe {
    /// Refreshes the underlying process snapshot. Called once per tick.
    fn refresh(&mut self);

    /// Whether a process whose executable resolves to `path` is running.
    fn is_process_running(&mut self, path: &str) -> bool;
}

/// Probe backed by the system process table.
pub struct SystemProbe {
    system: System,
}

impl SystemProbe {
    pub fn new() -> Self {
        SystemProbe { system: System::new() }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for SystemProbe {
    fn refresh(&mut self) {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
    }

    fn is_process_running(&mut self, path: &str) -> bool {
        // A path that does not resolve is treated as a dead process, not
        // an error.
        let target = match Path::new(path).canonicalize() {
            Ok(target) => target,
            Err(_) => return false,
        };
        self.system
            .processes()
            .values()
            .any(|process| process.exe().map(|exe| exe == target).unwrap_or(false))
    }
}

/// Tracks which monitored tasks were running on the previous tick and
/// turns edges into store updates.
pub struct LivenessMonitor {
    probe: Box<dyn ProcessProbe + Send>,
    running: HashSet<String>,
}

impl LivenessMonitor {
    pub fn new(probe: Box<dyn ProcessProbe + Send>) -> Self {
        LivenessMonitor {
            probe,
            running: HashSet::new(),
        }
    }

    /// Whether the task was running as of the last poll.
    pub fn is_running(&self, task_id: &str) -> bool {
        self.running.contains(task_id)
    }

    /// Polls every monitored task once and applies edge transitions.
    ///
    /// Returns `true` when any task changed liveness this tick. A
    /// stop edge writes the completion timestamp exactly once, through
    /// the store; a start edge only flags the change.
    pub fn check_and_update_statuses(&mut self, store: &mut TaskStore, now: DateTime<Local>) -> bool {
        self.probe.refresh();

        let mut changed = false;
        let watched: Vec<(String, String)> = store
            .tasks
            .iter()
            .filter(|task| !task.monitoring_path.is_empty())
            .map(|task| (task.id.clone(), task.monitoring_path.clone()))
            .collect();

        for (id, path) in &watched {
            let is_running = self.probe.is_process_running(path);
            let was_running = self.running.contains(id);

            if was_running && !is_running {
                msg_debug!(format!("process stopped: {}", path));
                self.running.remove(id);
                store.touch_last_played(id, now);
                changed = true;
            } else if !was_running && is_running {
                msg_debug!(format!("process started: {}", path));
                self.running.insert(id.clone());
                changed = true;
            }
        }

        // Forget deleted tasks so a re-added id starts from a clean slate.
        let known: HashSet<&String> = watched.iter().map(|(id, _)| id).collect();
        self.running.retain(|id| known.contains(id));

        changed
    }
}
