//! System boot integration.
//!
//! Registers the watch daemon to start on login. Windows prefers a Task
//! Scheduler task and falls back to the per-user registry Run key when
//! administrative privileges are missing. Linux uses an XDG autostart
//! desktop entry. macOS is not wired up yet.

use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use std::env;

#[cfg(target_os = "windows")]
mod windows {
    use super::*;
    use crate::msg_debug;
    use std::os::windows::process::CommandExt;
    use std::process::Command;

    const TASK_NAME: &str = "GcycleAutostart";
    const CREATE_NO_WINDOW: u32 = 0x08000000;

    /// Converts Windows command output from the OEM codepage to UTF-8.
    pub(crate) fn decode_windows_output(bytes: &[u8]) -> String {
        if let Ok(utf8) = String::from_utf8(bytes.to_vec()) {
            return utf8;
        }
        encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
    }

    /// Creates a logon-triggered Task Scheduler entry. Needs admin.
    pub fn enable() -> Result<()> {
        let exe_path = env::current_exe()?;
        let exe_path_str = exe_path.to_string_lossy();

        msg_debug!(format!("Creating scheduled task for: {}", exe_path_str));

        // Remove any existing task to ensure clean configuration
        let _ = Command::new("schtasks")
            .args(&["/Delete", "/TN", TASK_NAME, "/F"])
            .creation_flags(CREATE_NO_WINDOW)
            .output();

        let output = Command::new("schtasks")
            .args(&[
                "/Create",
                "/SC",
                "ONLOGON",
                "/TN",
                TASK_NAME,
                "/TR",
                &format!("\"{}\" watch", exe_path_str),
                "/RL",
                "LIMITED",
                "/F",
            ])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;

        if output.status.success() {
            msg_info!(Message::AutostartEnabled);
            Ok(())
        } else {
            let error = decode_windows_output(&output.stderr);
            msg_debug!(format!("schtasks stderr: {}", error));

            if error.contains("Access is denied") || error.contains("0x80070005") {
                Err(msg_error_anyhow!(Message::AutostartRequiresAdmin))
            } else {
                Err(msg_error_anyhow!(Message::AutostartEnableFailed(error)))
            }
        }
    }

    pub fn disable() -> Result<()> {
        let output = Command::new("schtasks")
            .args(&["/Delete", "/TN", TASK_NAME, "/F"])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;

        if output.status.success() {
            msg_info!(Message::AutostartDisabled);
            Ok(())
        } else {
            let error = decode_windows_output(&output.stderr);

            if error.contains("cannot find") || error.contains("does not exist") {
                msg_info!(Message::AutostartAlreadyDisabled);
                Ok(())
            } else if error.contains("Access is denied") || error.contains("0x80070005") {
                Err(msg_error_anyhow!(Message::AutostartRequiresAdmin))
            } else {
                Err(msg_error_anyhow!(Message::AutostartDisableFailed(error)))
            }
        }
    }

    pub fn is_enabled() -> Result<bool> {
        let output = Command::new("schtasks")
            .args(&["/Query", "/TN", TASK_NAME, "/FO", "CSV"])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;
        Ok(output.status.success())
    }

    pub fn is_admin() -> bool {
        use std::ptr;
        use winapi::um::handleapi::CloseHandle;
        use winapi::um::processthreadsapi::{GetCurrentProcess, OpenProcessToken};
        use winapi::um::securitybaseapi::GetTokenInformation;
        use winapi::um::winnt::{TokenElevation, TOKEN_ELEVATION, TOKEN_QUERY};

        unsafe {
            let mut token = ptr::null_mut();
            if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token) == 0 {
                return false;
            }

            let mut elevation = TOKEN_ELEVATION { TokenIsElevated: 0 };
            let mut size = 0;
            let result = GetTokenInformation(
                token,
                TokenElevation,
                &mut elevation as *mut _ as *mut _,
                std::mem::size_of::<TOKEN_ELEVATION>() as u32,
                &mut size,
            );

            CloseHandle(token);

            result != 0 && elevation.TokenIsElevated != 0
        }
    }

    /// Per-user fallback via the HKCU Run key, no elevation required.
    pub fn enable_user() -> Result<()> {
        let exe_path = env::current_exe()?;
        let exe_path_str = exe_path.to_string_lossy();

        msg_debug!("Trying user-level autostart via Registry");

        let output = Command::new("reg")
            .args(&[
                "add",
                r"HKCU\Software\Microsoft\Windows\CurrentVersion\Run",
                "/v",
                "Gcycle",
                "/t",
                "REG_SZ",
                "/d",
                &format!("\"{}\" watch", exe_path_str),
                "/f",
            ])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;

        if output.status.success() {
            msg_info!(Message::AutostartEnabledUser);
            Ok(())
        } else {
            let error = decode_windows_output(&output.stderr);
            Err(msg_error_anyhow!(Message::AutostartEnableFailed(error)))
        }
    }

    pub fn disable_user() -> Result<()> {
        let output = Command::new("reg")
            .args(&[
                "delete",
                r"HKCU\Software\Microsoft\Windows\CurrentVersion\Run",
                "/v",
                "Gcycle",
                "/f",
            ])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            let error = decode_windows_output(&output.stderr);
            if error.contains("The system cannot find") {
                Ok(())
            } else {
                Err(msg_error_anyhow!(Message::AutostartDisableFailed(error)))
            }
        }
    }

    pub fn is_enabled_user() -> Result<bool> {
        let output = Command::new("reg")
            .args(&["query", r"HKCU\Software\Microsoft\Windows\CurrentVersion\Run", "/v", "Gcycle"])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;
        Ok(output.status.success())
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn desktop_entry_path() -> Result<PathBuf> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
            .map_err(|_| msg_error_anyhow!(Message::AutostartEnableFailed("HOME is not set".to_string())))?;
        Ok(config_home.join("autostart").join("gcycle.desktop"))
    }

    pub fn enable() -> Result<()> {
        let exe_path = env::current_exe()?;
        let entry_path = desktop_entry_path()?;
        if let Some(parent) = entry_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entry = format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name=gcycle\n\
             Exec={} watch\n\
             X-GNOME-Autostart-enabled=true\n",
            exe_path.display()
        );
        fs::write(&entry_path, entry)?;
        msg_info!(Message::AutostartEnabled);
        Ok(())
    }

    pub fn disable() -> Result<()> {
        let entry_path = desktop_entry_path()?;
        if entry_path.exists() {
            fs::remove_file(entry_path)?;
            msg_info!(Message::AutostartDisabled);
        } else {
            msg_info!(Message::AutostartAlreadyDisabled);
        }
        Ok(())
    }

    pub fn is_enabled() -> Result<bool> {
        Ok(desktop_entry_path()?.exists())
    }
}

/// Enables autostart with the best method available on this platform.
pub fn enable() -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        if !windows::is_admin() {
            msg_info!(Message::AutostartCheckingAlternative);
            return windows::enable_user();
        }
        return windows::enable();
    }

    #[cfg(target_os = "linux")]
    return linux::enable();

    #[cfg(not(any(target_os = "windows", target_os = "linux")))]
    Err(msg_error_anyhow!(Message::AutostartNotImplemented))
}

/// Disables autostart, cleaning up every location it may live in.
pub fn disable() -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        let _ = windows::disable();
        let _ = windows::disable_user();
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    return linux::disable();

    #[cfg(not(any(target_os = "windows", target_os = "linux")))]
    Err(msg_error_anyhow!(Message::AutostartNotImplemented))
}

/// Whether any autostart registration currently exists.
pub fn is_enabled() -> Result<bool> {
    #[cfg(target_os = "windows")]
    {
        if windows::is_enabled().unwrap_or(false) {
            return Ok(true);
        }
        return windows::is_enabled_user();
    }

    #[cfg(target_os = "linux")]
    return linux::is_enabled();

    #[cfg(not(any(target_os = "windows", target_os = "linux")))]
    Ok(false)
}

pub fn status() -> Result<String> {
    match is_enabled()? {
        true => Ok("enabled".to_string()),
        false => Ok("disabled".to_string()),
    }
}
