//! Launching tasks and opening shortcut URLs.
//!
//! A task launches from its `launch_path` (falling back to the monitored
//! executable). Windows `.url` internet shortcuts are parsed for their
//! `URL=` line and opened in the default browser; anything else is
//! spawned as a program with its own directory as working directory.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::Command;

use super::settings::GlobalSettings;
use super::task::ManagedTask;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug};

/// Starts the program (or opens the link) behind a task.
pub fn launch_task(task: &ManagedTask, settings: &GlobalSettings) -> Result<()> {
    let path = task
        .launch_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(task.monitoring_path.as_str());
    if path.is_empty() {
        msg_bail_anyhow!(Message::LaunchPathMissing(task.name.clone()));
    }
    launch_path(path, settings.launch_as_admin)
}

/// Launches an arbitrary path, dispatching on the `.url` extension.
/// `elevated` requests an elevated launch and only applies to Windows
/// programs; URLs always open unelevated.
pub fn launch_path(path: &str, elevated: bool) -> Result<()> {
    let path_ref = Path::new(path);
    let is_url_file = path_ref
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("url"))
        .unwrap_or(false);

    if is_url_file {
        let url = read_url_file(path_ref)?;
        return open_url(&url);
    }

    if !path_ref.exists() {
        msg_bail_anyhow!(Message::LaunchPathNotFound(path.to_string()));
    }

    #[cfg(target_os = "windows")]
    if elevated {
        let script = format!("Start-Process -FilePath '{}' -Verb RunAs", path.replace('\'', "''"));
        Command::new("powershell").args(["-NoProfile", "-Command", &script]).spawn()?;
        msg_debug!(format!("launched elevated: {}", path));
        return Ok(());
    }

    #[cfg(not(target_os = "windows"))]
    let _ = elevated;

    let mut command = Command::new(path_ref);
    if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
        command.current_dir(parent);
    }
    command.spawn()?;
    msg_debug!(format!("launched: {}", path));
    Ok(())
}

/// Opens a URL in the default browser.
pub fn open_url(url: &str) -> Result<()> {
    #[cfg(target_os = "linux")]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    msg_bail_anyhow!(Message::LaunchNotSupported);

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    {
        command.spawn()?;
        msg_debug!(format!("opened url: {}", url));
        Ok(())
    }
}

/// Extracts the target from a Windows internet shortcut file.
fn read_url_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    for line in contents.lines() {
        if let Some(url) = line.trim().strip_prefix("URL=") {
            if !url.is_empty() {
                return Ok(url.to_string());
            }
        }
    }
    Err(crate::msg_error_anyhow!(Message::UrlFileMissingTarget(
        path.display().to_string()
    )))
}
