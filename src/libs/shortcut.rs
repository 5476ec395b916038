//! Web shortcut records.
//!
//! A `WebShortcut` is a reset-tracked link: clicking it ("using" it)
//! stamps `last_reset_timestamp`, and the optional daily `refresh_time`
//! decides whether the shortcut shows as due (red), done (green), or
//! neutral. With no `refresh_time` the shortcut carries no color signal
//! at all.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebShortcut {
    /// Unique identifier, immutable after creation.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Target URL opened on use.
    pub url: String,

    /// Daily reset time of day ("HH:MM").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_time: Option<String>,

    /// Last moment the shortcut was used (clicked).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reset_timestamp: Option<DateTime<Local>>,
}

impl WebShortcut {
    pub fn new(name: &str, url: &str) -> Self {
        WebShortcut {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            url: url.to_string(),
            refresh_time: None,
            last_reset_timestamp: None,
        }
    }
}
