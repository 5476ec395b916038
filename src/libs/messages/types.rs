#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskMarkedDone(String),
    TasksEmpty,
    NoChangesDetected,
    ConfirmDeleteTask(String),

    // === SHORTCUT MESSAGES ===
    ShortcutCreated(String),
    ShortcutUpdated(String),
    ShortcutDeleted(String),
    ShortcutNotFound(String),
    ShortcutOpened(String),
    ShortcutsEmpty,
    ConfirmDeleteShortcut(String),

    // === PROMPTS ===
    PromptTaskName,
    PromptMonitoringPath,
    PromptLaunchPath,
    PromptServerResetTime,
    PromptUserCycleHours,
    PromptMandatoryTimes,
    PromptMandatoryEnabled,
    PromptShortcutName,
    PromptShortcutUrl,
    PromptRefreshTime,
    PromptSleepStart,
    PromptSleepEnd,
    PromptSleepAdvance,
    PromptDeadlineAdvance,
    PromptRunOnStartup,
    PromptLaunchAsAdmin,
    PromptAlwaysOnTop,
    PromptTickInterval,

    // === VALIDATION ===
    InvalidTimeOfDay(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleScheduler,

    // === SETTINGS MESSAGES ===
    SettingsSaved,
    SettingsHeader,

    // === STORE MESSAGES ===
    StoreReadFailed(String, String),
    StoreWriteFailed(String, String),
    StoreCorruptFile(String, String),
    StoreChangeNotPersisted,

    // === LAUNCH MESSAGES ===
    LaunchedTask(String),
    LaunchPathMissing(String),
    LaunchPathNotFound(String),
    LaunchNotSupported,
    UrlFileMissingTarget(String),

    // === NOTIFICATION BODIES ===
    NotifyTaskDue(String),
    NotifyDueSoon(String, String),
    NotifyBeforeSleep(String),
    NotifyShortcutDue(String),

    // === SCHEDULER MESSAGES ===
    SchedulerStarted(u64),
    SchedulerError(String),
    SchedulerExitedNormally,
    SchedulerShuttingDown,
    SchedulerTaskPanicked(String),

    // === WATCHER MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),
    WatcherFailedToStopExisting(String),
    WatcherFailedToStop(u32),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    InvalidPidFileContent,
    DaemonModeNotSupported,
    ProcessTerminationNotSupported,
    FailedToOpenProcess(u32),
    FailedToTerminateProcess(u32),
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === AUTOSTART MESSAGES ===
    AutostartEnabled,
    AutostartEnabledUser,
    AutostartDisabled,
    AutostartAlreadyDisabled,
    AutostartEnableFailed(String),
    AutostartDisableFailed(String),
    AutostartStatus(String),
    AutostartNotImplemented,
    AutostartRequiresAdmin,
    AutostartCheckingAlternative,
}
