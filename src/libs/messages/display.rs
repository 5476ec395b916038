//! Display implementation for gcycle application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and the rest of the code deals only in `Message` values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated", name),
            Message::TaskDeleted(name) => format!("Task '{}' deleted", name),
            Message::TaskNotFound(name) => format!("Task '{}' not found", name),
            Message::TaskMarkedDone(name) => format!("Task '{}' marked as completed", name),
            Message::TasksEmpty => "No tasks yet. Add one with 'gcycle task add'".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),

            // === SHORTCUT MESSAGES ===
            Message::ShortcutCreated(name) => format!("Shortcut '{}' created", name),
            Message::ShortcutUpdated(name) => format!("Shortcut '{}' updated", name),
            Message::ShortcutDeleted(name) => format!("Shortcut '{}' deleted", name),
            Message::ShortcutNotFound(name) => format!("Shortcut '{}' not found", name),
            Message::ShortcutOpened(name) => format!("Shortcut '{}' opened", name),
            Message::ShortcutsEmpty => "No shortcuts yet. Add one with 'gcycle shortcut add'".to_string(),
            Message::ConfirmDeleteShortcut(name) => format!("Delete shortcut '{}'?", name),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptMonitoringPath => "Path of the executable to monitor (empty for none)".to_string(),
            Message::PromptLaunchPath => "Path used to launch the task (empty to reuse the monitored path)".to_string(),
            Message::PromptServerResetTime => "Daily server reset time, HH:MM (empty for none)".to_string(),
            Message::PromptUserCycleHours => "Rolling cycle length in hours (0 for none)".to_string(),
            Message::PromptMandatoryTimes => "Mandatory check-in times, comma-separated HH:MM (empty for none)".to_string(),
            Message::PromptMandatoryEnabled => "Enforce mandatory check-in times?".to_string(),
            Message::PromptShortcutName => "Shortcut name".to_string(),
            Message::PromptShortcutUrl => "Shortcut URL".to_string(),
            Message::PromptRefreshTime => "Daily refresh time, HH:MM (empty for none)".to_string(),
            Message::PromptSleepStart => "Sleep window start, HH:MM".to_string(),
            Message::PromptSleepEnd => "Sleep window end, HH:MM".to_string(),
            Message::PromptSleepAdvance => "Hours before sleep to remind about unfinished tasks".to_string(),
            Message::PromptDeadlineAdvance => "Hours before a cycle deadline to send a heads-up".to_string(),
            Message::PromptRunOnStartup => "Start the watcher on system login?".to_string(),
            Message::PromptLaunchAsAdmin => "Launch task programs elevated (Windows)?".to_string(),
            Message::PromptAlwaysOnTop => "Keep companion windows always on top?".to_string(),
            Message::PromptTickInterval => "Seconds between evaluation ticks".to_string(),

            // === VALIDATION ===
            Message::InvalidTimeOfDay(value) => format!("'{}' is not a valid HH:MM time", value),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleScheduler => "Scheduler configuration".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsSaved => "Settings saved".to_string(),
            Message::SettingsHeader => "Global settings".to_string(),

            // === STORE MESSAGES ===
            Message::StoreReadFailed(file, e) => format!("Could not read {}: {}", file, e),
            Message::StoreWriteFailed(file, e) => format!("Could not write {}: {}", file, e),
            Message::StoreCorruptFile(file, e) => format!("{} is corrupt, starting from defaults: {}", file, e),
            Message::StoreChangeNotPersisted => "The change could not be written to disk".to_string(),

            // === LAUNCH MESSAGES ===
            Message::LaunchedTask(name) => format!("Launched '{}'", name),
            Message::LaunchPathMissing(name) => format!("Task '{}' has no launch path", name),
            Message::LaunchPathNotFound(path) => format!("Launch path does not exist: {}", path),
            Message::LaunchNotSupported => "Launching is not supported on this platform".to_string(),
            Message::UrlFileMissingTarget(path) => format!("No URL= entry found in {}", path),

            // === NOTIFICATION BODIES ===
            Message::NotifyTaskDue(name) => format!("'{}' has reset and is ready to play", name),
            Message::NotifyDueSoon(name, remaining) => format!("'{}' cycle ends in {}", name, remaining),
            Message::NotifyBeforeSleep(name) => format!("'{}' is still unfinished and bedtime is near", name),
            Message::NotifyShortcutDue(name) => format!("'{}' has refreshed", name),

            // === SCHEDULER MESSAGES ===
            Message::SchedulerStarted(secs) => format!("Scheduler started, ticking every {}s", secs),
            Message::SchedulerError(e) => format!("Scheduler error: {}", e),
            Message::SchedulerExitedNormally => "Scheduler exited normally".to_string(),
            Message::SchedulerShuttingDown => "Shutting down scheduler...".to_string(),
            Message::SchedulerTaskPanicked(e) => format!("Scheduler task panicked: {}", e),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher with PID {} stopped", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})", pid),
            Message::WatcherFailedToStopExisting(e) => format!("Failed to stop existing watcher: {}", e),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher with PID {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error {})", code),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === AUTOSTART MESSAGES ===
            Message::AutostartEnabled => "Autostart enabled".to_string(),
            Message::AutostartEnabledUser => "Autostart enabled for the current user".to_string(),
            Message::AutostartDisabled => "Autostart disabled".to_string(),
            Message::AutostartAlreadyDisabled => "Autostart is already disabled".to_string(),
            Message::AutostartEnableFailed(e) => format!("Failed to enable autostart: {}", e),
            Message::AutostartDisableFailed(e) => format!("Failed to disable autostart: {}", e),
            Message::AutostartStatus(status) => format!("Autostart is {}", status),
            Message::AutostartNotImplemented => "Autostart is not implemented for this platform".to_string(),
            Message::AutostartRequiresAdmin => "Autostart requires administrator privileges".to_string(),
            Message::AutostartCheckingAlternative => "Checking alternative autostart methods...".to_string(),
        };
        write!(f, "{}", text)
    }
}
