//! Desktop notification delivery.
//!
//! Delivery is fire-and-forget: a toast that fails to appear is logged
//! and dropped, it never blocks the tick loop or bubbles an error up.

use std::process::Command;

use super::dispatcher::Notification;
use crate::msg_debug;

/// Sink for dispatched notifications. Tests substitute a recorder.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

/// Notifier backed by the platform's notification mechanism.
#[derive(Default)]
pub struct SystemNotifier {}

impl SystemNotifier {
    pub fn new() -> Self {
        SystemNotifier {}
    }
}

impl Notifier for SystemNotifier {
    #[cfg(target_os = "linux")]
    fn notify(&mut self, notification: &Notification) {
        let result = Command::new("notify-send")
            .arg(&notification.title)
            .arg(&notification.body)
            .spawn();
        if let Err(e) = result {
            msg_debug!(format!("notify-send failed: {}", e));
        }
    }

    #[cfg(target_os = "macos")]
    fn notify(&mut self, notification: &Notification) {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            notification.body.replace('"', "'"),
            notification.title.replace('"', "'")
        );
        let result = Command::new("osascript").arg("-e").arg(script).spawn();
        if let Err(e) = result {
            msg_debug!(format!("osascript failed: {}", e));
        }
    }

    #[cfg(target_os = "windows")]
    fn notify(&mut self, notification: &Notification) {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x08000000;

        // Balloon tip via the shell; avoids a toast framework dependency.
        let script = format!(
            "Add-Type -AssemblyName System.Windows.Forms; \
             Add-Type -AssemblyName System.Drawing; \
             $n = New-Object System.Windows.Forms.NotifyIcon; \
             $n.Icon = [System.Drawing.SystemIcons]::Information; \
             $n.Visible = $true; \
             $n.ShowBalloonTip(10000, '{}', '{}', 'Info')",
            notification.title.replace('\'', " "),
            notification.body.replace('\'', " ")
        );
        let result = Command::new("powershell")
            .args(["-NoProfile", "-Command", &script])
            .creation_flags(CREATE_NO_WINDOW)
            .spawn();
        if let Err(e) = result {
            msg_debug!(format!("powershell notification failed: {}", e));
        }
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    fn notify(&mut self, notification: &Notification) {
        msg_debug!(format!("notification dropped (unsupported platform): {}", notification.title));
    }
}
