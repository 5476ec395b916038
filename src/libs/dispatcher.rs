//! Notification dispatch policy.
//!
//! The dispatcher turns evaluated states into at-most-one notification
//! per cycle occurrence. Every trigger is identified by the pair of a
//! record id and a trigger kind, and remembers the occurrence key it last
//! fired for; the same key is never announced twice, while a new cycle
//! produces a new key and re-arms the trigger.
//!
//! Inside the configured sleep window nothing is emitted and nothing is
//! recorded, so a task still due at wake-up gets its reminder then.

use chrono::{DateTime, Duration, Local, NaiveDateTime};
use std::collections::{HashMap, HashSet};

use super::engine::{self, ButtonState, TaskStatus};
use super::formatter::format_duration;
use super::liveness::LivenessMonitor;
use super::store::TaskStore;
use crate::libs::messages::Message;

/// Why a notification fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// The record is due now.
    Due,
    /// A rolling-cycle deadline is approaching.
    DueSoon,
    /// The sleep window opens soon and the task is still due.
    BeforeSleep,
}

/// A notification ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub kind: TriggerKind,
}

#[derive(Default)]
pub struct NotificationDispatcher {
    sent: HashMap<(String, TriggerKind), NaiveDateTime>,
}

impl NotificationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates every record and returns the notifications to deliver.
    ///
    /// The returned list is already de-duplicated against previous calls.
    /// During the sleep window the method is a no-op: it neither emits
    /// nor marks anything as delivered.
    pub fn collect(&mut self, store: &TaskStore, monitor: &LivenessMonitor, now: DateTime<Local>) -> Vec<Notification> {
        if store.settings.in_sleep_window(now.time()) {
            return Vec::new();
        }

        let now_naive = now.naive_local();
        let mut out = Vec::new();

        let deadline_advance = hours_to_duration(store.settings.cycle_deadline_advance_notify_hours);
        let sleep_advance = hours_to_duration(store.settings.sleep_advance_notify_hours);
        let next_sleep_start = store.settings.sleep_start_time().map(|start| {
            let candidate = now_naive.date().and_time(start);
            if candidate < now_naive {
                candidate + Duration::hours(24)
            } else {
                candidate
            }
        });

        for task in &store.tasks {
            let running = monitor.is_running(&task.id);
            let status = engine::determine_task_status(task, running, now_naive);
            let key = match engine::occurrence_key(task, now_naive) {
                Some(key) => key,
                None => continue,
            };

            if status == TaskStatus::Incomplete {
                if self.arm(&task.id, TriggerKind::Due, key) {
                    out.push(Notification {
                        title: task.name.clone(),
                        body: Message::NotifyTaskDue(task.name.clone()).to_string(),
                        kind: TriggerKind::Due,
                    });
                }

                // Keyed by the sleep-start instant, not the cycle: a task
                // still unfinished the next evening reminds again.
                if let Some(sleep_start) = next_sleep_start {
                    let lead = sleep_start - now_naive;
                    if lead > Duration::zero() && lead <= sleep_advance && self.arm(&task.id, TriggerKind::BeforeSleep, sleep_start) {
                        out.push(Notification {
                            title: task.name.clone(),
                            body: Message::NotifyBeforeSleep(task.name.clone()).to_string(),
                            kind: TriggerKind::BeforeSleep,
                        });
                    }
                }
            }

            if status == TaskStatus::Completed {
                if let Some(deadline) = engine::cycle_deadline(task) {
                    let lead = deadline - now_naive;
                    if lead > Duration::zero() && lead <= deadline_advance && self.arm(&task.id, TriggerKind::DueSoon, key) {
                        out.push(Notification {
                            title: task.name.clone(),
                            body: Message::NotifyDueSoon(task.name.clone(), format_duration(&lead)).to_string(),
                            kind: TriggerKind::DueSoon,
                        });
                    }
                }
            }
        }

        for shortcut in &store.shortcuts {
            if engine::determine_button_state(shortcut, now_naive) != ButtonState::Red {
                continue;
            }
            // Red only exists once today's reset has passed, so the reset
            // instant itself identifies the occurrence.
            let refresh = match shortcut.refresh_time.as_deref().and_then(engine::parse_time_of_day) {
                Some(refresh) => refresh,
                None => continue,
            };
            let key = now_naive.date().and_time(refresh);
            if self.arm(&shortcut.id, TriggerKind::Due, key) {
                out.push(Notification {
                    title: shortcut.name.clone(),
                    body: Message::NotifyShortcutDue(shortcut.name.clone()).to_string(),
                    kind: TriggerKind::Due,
                });
            }
        }

        // Forget deleted records so the map stays bounded by the store.
        let known: HashSet<&str> = store
            .tasks
            .iter()
            .map(|task| task.id.as_str())
            .chain(store.shortcuts.iter().map(|shortcut| shortcut.id.as_str()))
            .collect();
        self.sent.retain(|(id, _), _| known.contains(id.as_str()));

        out
    }

    /// Marks the occurrence as notified unless it already was.
    /// Returns `true` when the caller should emit.
    fn arm(&mut self, id: &str, kind: TriggerKind, key: NaiveDateTime) -> bool {
        let slot = (id.to_string(), kind);
        if self.sent.get(&slot) == Some(&key) {
            return false;
        }
        self.sent.insert(slot, key);
        true
    }
}

fn hours_to_duration(hours: f64) -> Duration {
    Duration::seconds((hours * 3600.0) as i64)
}
