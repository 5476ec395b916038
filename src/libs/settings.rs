//! Global tracker settings.
//!
//! Settings that apply across all tasks and shortcuts: the nightly sleep
//! window during which notifications are suppressed, and the advance
//! warning horizons for upcoming deadlines. Stored alongside the task
//! collections as `settings.json`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::engine::parse_time_of_day;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalSettings {
    /// Start of the nightly suppression window ("HH:MM").
    #[serde(default = "default_sleep_start")]
    pub sleep_start: String,

    /// End of the nightly suppression window ("HH:MM").
    #[serde(default = "default_sleep_end")]
    pub sleep_end: String,

    /// Hours before the sleep window opens at which still-incomplete
    /// tasks get a reminder.
    #[serde(default = "default_sleep_advance")]
    pub sleep_advance_notify_hours: f64,

    /// Hours before a rolling-cycle deadline at which a heads-up fires.
    #[serde(default = "default_deadline_advance")]
    pub cycle_deadline_advance_notify_hours: f64,

    /// Whether the watch daemon should be registered for system startup.
    #[serde(default)]
    pub run_on_startup: bool,

    /// Launch task programs elevated (Windows only).
    #[serde(default)]
    pub launch_as_admin: bool,

    /// Kept for external UIs reading the same settings file; the CLI
    /// stores it but never acts on it.
    #[serde(default)]
    pub always_on_top: bool,
}

fn default_sleep_start() -> String {
    "00:00".to_string()
}

fn default_sleep_end() -> String {
    "08:00".to_string()
}

fn default_sleep_advance() -> f64 {
    1.0
}

fn default_deadline_advance() -> f64 {
    2.0
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            sleep_start: default_sleep_start(),
            sleep_end: default_sleep_end(),
            sleep_advance_notify_hours: default_sleep_advance(),
            cycle_deadline_advance_notify_hours: default_deadline_advance(),
            run_on_startup: false,
            launch_as_admin: false,
            always_on_top: false,
        }
    }
}

impl GlobalSettings {
    /// Parsed start of the sleep window, if well-formed.
    pub fn sleep_start_time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.sleep_start)
    }

    /// Parsed end of the sleep window, if well-formed.
    pub fn sleep_end_time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.sleep_end)
    }

    /// Whether `now` falls inside the sleep window.
    ///
    /// The window may wrap past midnight (e.g. 22:00 to 06:00). An equal
    /// start and end means no window at all, and a malformed boundary
    /// disables suppression rather than silencing everything.
    pub fn in_sleep_window(&self, now: NaiveTime) -> bool {
        let (start, end) = match (self.sleep_start_time(), self.sleep_end_time()) {
            (Some(start), Some(end)) => (start, end),
            _ => return false,
        };
        if start == end {
            return false;
        }
        if start < end {
            now >= start && now < end
        } else {
            now >= start || now < end
        }
    }
}
