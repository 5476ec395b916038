//! # Gcycle - Game Cycle Helper
//!
//! A command-line utility for tracking recurring game tasks and web
//! shortcuts: daily server resets, rolling cycles, mandatory check-in
//! times, process liveness and due notifications.
//!
//! ## Features
//!
//! - **Cycle Tracking**: Daily server resets and rolling "N hours since
//!   last played" cycles, with optional mandatory check-in times
//! - **Process Monitoring**: A background watcher records a completion
//!   whenever a monitored game's process stops
//! - **Web Shortcuts**: Reset-tracked links with red/green button states
//! - **Notifications**: At most one desktop notification per cycle
//!   occurrence, silenced during the configured sleep window
//! - **Autostart**: Optional registration of the watcher on login
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gcycle::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
