pub mod autostart;
pub mod config;
pub mod daemon;
pub mod data_storage;
pub mod dispatcher;
pub mod engine;
pub mod formatter;
pub mod launcher;
pub mod liveness;
pub mod messages;
pub mod notifier;
pub mod scheduler;
pub mod settings;
pub mod shortcut;
pub mod store;
pub mod task;
pub mod view;
