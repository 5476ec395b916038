//! Application configuration.
//!
//! A small JSON file in the platform data directory, separate from the
//! tracked collections: the config describes how the tracker runs (tick
//! rate), while tasks, shortcuts and global settings live in the store.
//! Missing file means defaults; `init` runs an interactive setup.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Tick loop configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Seconds between evaluation rounds. The engine is cheap; one
    /// second keeps process edges and due flips feeling immediate.
    pub tick_interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig { tick_interval_secs: 1 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<SchedulerConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.scheduler.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleScheduler);
        config.scheduler = Some(SchedulerConfig {
            tick_interval_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTickInterval.to_string())
                .default(default.tick_interval_secs)
                .interact_text()?,
        });

        Ok(config)
    }
}
