//! Persistent collections of tasks, shortcuts and settings.
//!
//! The store keeps three JSON files in the application data directory and
//! rewrites each file whole on every change. Mutating operations report
//! success as a plain `bool`: a failed write leaves the in-memory state
//! updated but tells the caller the change did not persist. Loading is
//! forgiving: a missing file means an empty collection, and a corrupt
//! file degrades to defaults with a warning instead of refusing to start.

use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use super::data_storage::DataStorage;
use super::engine::parse_time_of_day;
use super::settings::GlobalSettings;
use super::shortcut::WebShortcut;
use super::task::ManagedTask;
use crate::libs::messages::Message;
use crate::msg_warning;

pub const TASKS_FILE_NAME: &str = "tasks.json";
pub const SHORTCUTS_FILE_NAME: &str = "shortcuts.json";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to resolve data path: {0}")]
    Path(String),
    #[error("failed to read {0}: {1}")]
    Read(String, std::io::Error),
    #[error("failed to write {0}: {1}")]
    Write(String, std::io::Error),
    #[error("failed to serialize {0}: {1}")]
    Serialize(String, serde_json::Error),
}

pub struct TaskStore {
    pub tasks: Vec<ManagedTask>,
    pub shortcuts: Vec<WebShortcut>,
    pub settings: GlobalSettings,
    storage: DataStorage,
}

impl TaskStore {
    /// Loads all collections from disk.
    ///
    /// Only an unresolvable data directory is a hard error; unreadable or
    /// corrupt collection files fall back to defaults so one bad file
    /// never takes the tracker down.
    pub fn load() -> Result<Self, StoreError> {
        let storage = DataStorage::new();
        let tasks = read_collection(&storage, TASKS_FILE_NAME)?.unwrap_or_default();
        let shortcuts = read_collection(&storage, SHORTCUTS_FILE_NAME)?.unwrap_or_default();
        let settings = read_collection(&storage, SETTINGS_FILE_NAME)?.unwrap_or_default();
        Ok(TaskStore {
            tasks,
            shortcuts,
            settings,
            storage,
        })
    }

    /// Builds an empty store rooted at an explicit data directory.
    pub fn with_storage(storage: DataStorage) -> Self {
        TaskStore {
            tasks: Vec::new(),
            shortcuts: Vec::new(),
            settings: GlobalSettings::default(),
            storage,
        }
    }

    pub fn find_task(&self, id: &str) -> Option<&ManagedTask> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn find_task_by_name(&self, name: &str) -> Option<&ManagedTask> {
        self.tasks.iter().find(|task| task.name.eq_ignore_ascii_case(name))
    }

    pub fn find_shortcut(&self, id: &str) -> Option<&WebShortcut> {
        self.shortcuts.iter().find(|shortcut| shortcut.id == id)
    }

    pub fn find_shortcut_by_name(&self, name: &str) -> Option<&WebShortcut> {
        self.shortcuts.iter().find(|shortcut| shortcut.name.eq_ignore_ascii_case(name))
    }

    pub fn add_task(&mut self, task: ManagedTask) -> bool {
        self.tasks.push(task);
        self.save_tasks()
    }

    /// Replaces the task with the same id. Returns `false` when the task
    /// is unknown or the write fails.
    pub fn update_task(&mut self, task: ManagedTask) -> bool {
        match self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => return false,
        }
        self.save_tasks()
    }

    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.save_tasks()
    }

    /// Records a completion instant for a task. This is the single write
    /// path for the process monitor's stop edge and for manual `done`.
    pub fn touch_last_played(&mut self, id: &str, at: DateTime<Local>) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => task.last_played_timestamp = Some(at),
            None => return false,
        }
        self.save_tasks()
    }

    pub fn add_shortcut(&mut self, shortcut: WebShortcut) -> bool {
        self.shortcuts.push(shortcut);
        self.save_shortcuts()
    }

    /// Replaces the shortcut with the same id. Removing the refresh time
    /// also clears the last-use stamp: without a reset schedule the old
    /// stamp has no window to be measured against, and a later re-enable
    /// must start neutral rather than inherit a stale green.
    pub fn update_shortcut(&mut self, mut shortcut: WebShortcut) -> bool {
        if shortcut.refresh_time.as_deref().and_then(parse_time_of_day).is_none() {
            shortcut.refresh_time = None;
            shortcut.last_reset_timestamp = None;
        }
        match self.shortcuts.iter_mut().find(|existing| existing.id == shortcut.id) {
            Some(existing) => *existing = shortcut,
            None => return false,
        }
        self.save_shortcuts()
    }

    pub fn remove_shortcut(&mut self, id: &str) -> bool {
        let before = self.shortcuts.len();
        self.shortcuts.retain(|shortcut| shortcut.id != id);
        if self.shortcuts.len() == before {
            return false;
        }
        self.save_shortcuts()
    }

    /// Stamps a shortcut as used at `at`.
    pub fn touch_last_reset(&mut self, id: &str, at: DateTime<Local>) -> bool {
        match self.shortcuts.iter_mut().find(|shortcut| shortcut.id == id) {
            Some(shortcut) => shortcut.last_reset_timestamp = Some(at),
            None => return false,
        }
        self.save_shortcuts()
    }

    pub fn save_settings(&self) -> bool {
        self.persist(SETTINGS_FILE_NAME, &self.settings)
    }

    fn save_tasks(&self) -> bool {
        self.persist(TASKS_FILE_NAME, &self.tasks)
    }

    fn save_shortcuts(&self) -> bool {
        self.persist(SHORTCUTS_FILE_NAME, &self.shortcuts)
    }

    fn persist<T: Serialize>(&self, file_name: &str, value: &T) -> bool {
        match self.write_collection(file_name, value) {
            Ok(()) => true,
            Err(e) => {
                msg_warning!(Message::StoreWriteFailed(file_name.to_string(), e.to_string()));
                false
            }
        }
    }

    fn write_collection<T: Serialize>(&self, file_name: &str, value: &T) -> Result<(), StoreError> {
        let path = self.storage.get_path(file_name).map_err(|e| StoreError::Path(e.to_string()))?;
        let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize(file_name.to_string(), e))?;
        fs::write(&path, json).map_err(|e| StoreError::Write(file_name.to_string(), e))?;
        Ok(())
    }
}

fn read_collection<T: DeserializeOwned>(storage: &DataStorage, file_name: &str) -> Result<Option<T>, StoreError> {
    let path: PathBuf = storage.get_path(file_name).map_err(|e| StoreError::Path(e.to_string()))?;
    if !path.exists() {
        return Ok(None);
    }
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            msg_warning!(Message::StoreReadFailed(file_name.to_string(), e.to_string()));
            return Ok(None);
        }
    };
    match serde_json::from_str(&contents) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            msg_warning!(Message::StoreCorruptFile(file_name.to_string(), e.to_string()));
            Ok(None)
        }
    }
}
