//! Managed task records.
//!
//! A `ManagedTask` describes one recurring obligation: a game (or any
//! program) whose process can be watched for liveness, plus the cycle
//! model that decides when it is due again. Exactly one of
//! `server_reset_time` (daily reset at a fixed time of day) or
//! `user_cycle_hours` (rolling "N hours since last completion") should
//! be set; with both absent the task has no cycle and its display state
//! is driven by liveness alone.
//!
//! Time-of-day fields are stored as "HH:MM" strings and parsed lazily at
//! evaluation time. Malformed values degrade to a neutral state instead
//! of failing the record (see the engine module).

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagedTask {
    /// Unique identifier, immutable after creation.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Filesystem path whose running-process state is observed.
    /// May be empty for manual-only tasks.
    #[serde(default)]
    pub monitoring_path: String,

    /// Optional path used to start the task's program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_path: Option<String>,

    /// Daily reset time of day ("HH:MM"); start of each 24h cycle window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_reset_time: Option<String>,

    /// Rolling cycle length in hours since the last completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_cycle_hours: Option<u32>,

    /// Additional required completion checkpoints within the cycle ("HH:MM").
    #[serde(default)]
    pub mandatory_times: Vec<String>,

    /// Gate for `mandatory_times`.
    #[serde(default)]
    pub is_mandatory_time_enabled: bool,

    /// Last observed running→stopped transition of the monitored
    /// process, or last manual completion. Proxy for "completed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played_timestamp: Option<DateTime<Local>>,
}

impl ManagedTask {
    pub fn new(name: &str, monitoring_path: &str) -> Self {
        ManagedTask {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            monitoring_path: monitoring_path.to_string(),
            launch_path: None,
            server_reset_time: None,
            user_cycle_hours: None,
            mandatory_times: Vec::new(),
            is_mandatory_time_enabled: false,
            last_played_timestamp: None,
        }
    }
}
