//! Reset and completion engine.
//!
//! Pure functions that decide, for a given wall-clock instant, whether a
//! task is due again and what state a shortcut button should show. All
//! arithmetic happens on `NaiveDateTime` in local civil time, so a cycle
//! boundary always lands at the same time-of-day even across DST shifts.
//!
//! Two cycle models exist:
//!
//! - **Daily reset**: the cycle starts at the most recent past-or-equal
//!   occurrence of `server_reset_time`. A completion recorded at or after
//!   that instant counts for the current cycle.
//! - **Rolling cycle**: the cycle starts at the last completion and runs
//!   for `user_cycle_hours`; with no completion on record the task is
//!   always due.
//!
//! Malformed "HH:MM" strings never fail a record: they parse to `None`
//! and the affected rule simply does not apply.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use super::shortcut::WebShortcut;
use super::task::ManagedTask;

/// Visual and scheduling state of a managed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The monitored process is currently running.
    Running,
    /// The current cycle's completion requirement is satisfied.
    Completed,
    /// The task is due.
    Incomplete,
}

/// Display state of a web shortcut button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Due: the reset has passed without a use.
    Red,
    /// Used within the current reset window.
    Green,
    /// No signal (no refresh time, or not yet determinable).
    Default,
}

/// Parses a strict "HH:MM" time-of-day string.
///
/// Returns `None` for anything else, including trailing garbage. Callers
/// treat `None` as "no rule configured".
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Most recent past-or-equal occurrence of `reset` relative to `now`.
///
/// This is the start of the current daily cycle. "Yesterday's" occurrence
/// is exactly 24 civil hours earlier.
pub fn daily_cycle_start(now: NaiveDateTime, reset: NaiveTime) -> NaiveDateTime {
    let candidate = now.date().and_time(reset);
    if candidate > now {
        candidate - Duration::hours(24)
    } else {
        candidate
    }
}

/// Start instant of the task's current cycle, if it has one.
///
/// Daily tasks anchor to the reset time-of-day; rolling tasks anchor to
/// the last completion. A rolling task that has never been completed has
/// no boundary yet and reports `None`.
pub fn cycle_start(task: &ManagedTask, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if let Some(reset) = task.server_reset_time.as_deref().and_then(parse_time_of_day) {
        return Some(daily_cycle_start(now, reset));
    }
    if task.user_cycle_hours.is_some() {
        return task.last_played_timestamp.map(|ts| ts.naive_local());
    }
    None
}

/// Latest completion requirement within the current daily cycle.
///
/// Starts at the cycle boundary and advances through every mandatory
/// instant that has already passed. Mandatory times are anchored to the
/// cycle-start date and rolled forward a day when they land before the
/// boundary, so a cycle crossing midnight still orders them correctly.
/// Future mandatory instants impose nothing yet.
fn daily_requirement(task: &ManagedTask, start: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
    let mut required = start;
    if !task.is_mandatory_time_enabled {
        return required;
    }
    for raw in &task.mandatory_times {
        let time = match parse_time_of_day(raw) {
            Some(time) => time,
            None => continue,
        };
        let mut instant = start.date().and_time(time);
        if instant < start {
            instant += Duration::hours(24);
        }
        if instant <= now && instant > required {
            required = instant;
        }
    }
    required
}

/// Decides the display status of a task at `now`.
///
/// A running process always wins. Otherwise the status comes from the
/// task's cycle model; a task with no applicable model (none configured,
/// or a reset time that fails to parse and no rolling cycle) never has a
/// satisfied requirement and shows as incomplete unless it is running.
pub fn determine_task_status(task: &ManagedTask, running: bool, now: NaiveDateTime) -> TaskStatus {
    if running {
        return TaskStatus::Running;
    }

    if let Some(reset) = task.server_reset_time.as_deref().and_then(parse_time_of_day) {
        let start = daily_cycle_start(now, reset);
        let required = daily_requirement(task, start, now);
        return match task.last_played_timestamp {
            Some(ts) if ts.naive_local() >= required => TaskStatus::Completed,
            _ => TaskStatus::Incomplete,
        };
    }

    if let Some(hours) = task.user_cycle_hours {
        return match task.last_played_timestamp {
            Some(ts) if now - ts.naive_local() < Duration::hours(hours as i64) => TaskStatus::Completed,
            _ => TaskStatus::Incomplete,
        };
    }

    TaskStatus::Incomplete
}

/// Decides the button state of a shortcut at `now`.
///
/// With no refresh time the button carries no signal. Otherwise today's
/// nominal reset instant splits the decision: once it has passed, a
/// missing or stale use turns the button red; before it, a use within the
/// previous window keeps the button green and anything else is neutral.
pub fn determine_button_state(shortcut: &WebShortcut, now: NaiveDateTime) -> ButtonState {
    let refresh = match shortcut.refresh_time.as_deref().and_then(parse_time_of_day) {
        Some(refresh) => refresh,
        None => return ButtonState::Default,
    };

    let today_reset = now.date().and_time(refresh);
    let last_reset = shortcut.last_reset_timestamp.map(|ts| ts.naive_local());

    if now >= today_reset {
        match last_reset {
            Some(ts) if ts >= today_reset => ButtonState::Green,
            _ => ButtonState::Red,
        }
    } else {
        match last_reset {
            Some(ts) if ts >= today_reset - Duration::hours(24) => ButtonState::Green,
            _ => ButtonState::Default,
        }
    }
}

/// Identity of the current cycle occurrence, for notification de-duplication.
///
/// Two evaluations within the same cycle produce the same key, so a
/// reminder already sent for this occurrence is never repeated. For daily
/// tasks the key advances through passed mandatory instants, making each
/// checkpoint its own occurrence. A rolling task that has never been
/// completed has no boundary; it keys on the epoch until the first
/// completion exists.
pub fn occurrence_key(task: &ManagedTask, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if let Some(reset) = task.server_reset_time.as_deref().and_then(parse_time_of_day) {
        let start = daily_cycle_start(now, reset);
        return Some(daily_requirement(task, start, now));
    }
    if task.user_cycle_hours.is_some() {
        return Some(
            task.last_played_timestamp
                .map(|ts| ts.naive_local())
                .unwrap_or(NaiveDateTime::UNIX_EPOCH),
        );
    }
    None
}

/// Instant at which a completed rolling task becomes due again.
///
/// Only rolling cycles have a deadline that depends on the completion
/// time; daily tasks flip at the fixed reset instant instead.
pub fn cycle_deadline(task: &ManagedTask) -> Option<NaiveDateTime> {
    let hours = task.user_cycle_hours?;
    let last = task.last_played_timestamp?;
    Some(last.naive_local() + Duration::hours(hours as i64))
}

/// Next instant at which the task's cycle rolls over.
///
/// Daily tasks roll at the next reset occurrence; rolling tasks at their
/// deadline. Tasks without a cycle (or rolling ones never completed)
/// have no boundary.
pub fn next_cycle_boundary(task: &ManagedTask, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if let Some(reset) = task.server_reset_time.as_deref().and_then(parse_time_of_day) {
        return Some(daily_cycle_start(now, reset) + Duration::hours(24));
    }
    cycle_deadline(task)
}

/// How far through its current cycle a task is, as a 0..=100 percentage.
///
/// Rolling tasks measure elapsed time against the cycle length; daily
/// tasks measure against the 24 hour window. Tasks without a cycle, or
/// rolling tasks never completed, report `None`.
pub fn cycle_progress(task: &ManagedTask, now: NaiveDateTime) -> Option<u8> {
    let (start, total) = if let Some(reset) = task.server_reset_time.as_deref().and_then(parse_time_of_day) {
        (daily_cycle_start(now, reset), Duration::hours(24))
    } else if let Some(hours) = task.user_cycle_hours {
        let last = task.last_played_timestamp?;
        (last.naive_local(), Duration::hours(hours as i64))
    } else {
        return None;
    };

    let elapsed = (now - start).num_seconds().max(0);
    let total = total.num_seconds().max(1);
    Some(((elapsed * 100 / total).min(100)) as u8)
}
