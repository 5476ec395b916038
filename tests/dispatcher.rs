#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
    use gcycle::libs::data_storage::DataStorage;
    use gcycle::libs::dispatcher::{Notification, NotificationDispatcher, TriggerKind};
    use gcycle::libs::liveness::{LivenessMonitor, ProcessProbe};
    use gcycle::libs::shortcut::WebShortcut;
    use gcycle::libs::store::TaskStore;
    use gcycle::libs::task::ManagedTask;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Probe that never sees a running process.
    struct IdleProbe;

    impl ProcessProbe for IdleProbe {
        fn refresh(&mut self) {}
        fn is_process_running(&mut self, _path: &str) -> bool {
            false
        }
    }

    struct DispatcherTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
        monitor: LivenessMonitor,
    }

    impl TestContext for DispatcherTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DispatcherTestContext {
                _temp_dir: temp_dir,
                store: TaskStore::with_storage(DataStorage::new()),
                monitor: LivenessMonitor::new(Box::new(IdleProbe)),
            }
        }
    }

    fn at(d: u32, h: u32, min: u32) -> DateTime<Local> {
        let naive: NaiveDateTime = NaiveDate::from_ymd_opt(2026, 3, d).unwrap().and_hms_opt(h, min, 0).unwrap();
        Local.from_local_datetime(&naive).single().unwrap()
    }

    fn daily_task(reset: &str) -> ManagedTask {
        let mut task = ManagedTask::new("Daily Quest", "");
        task.server_reset_time = Some(reset.to_string());
        task
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_due_fires_once_per_occurrence(ctx: &mut DispatcherTestContext) {
        ctx.store.tasks.push(daily_task("06:00"));
        let mut dispatcher = NotificationDispatcher::new();

        let first = dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 9, 0));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].kind, TriggerKind::Due);

        // Ticks later in the same cycle stay silent.
        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 9, 0)).is_empty());
        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 20, 0)).is_empty());
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_new_cycle_rearms_the_trigger(ctx: &mut DispatcherTestContext) {
        ctx.store.tasks.push(daily_task("06:00"));
        let mut dispatcher = NotificationDispatcher::new();

        // Late-evening ticks can legitimately carry a bedtime reminder,
        // so only the due trigger is counted here.
        let due_count = |list: Vec<Notification>| list.iter().filter(|n| n.kind == TriggerKind::Due).count();

        assert_eq!(due_count(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 9, 0))), 1);
        assert_eq!(due_count(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 23, 0))), 0);

        // The next day's reset is a new occurrence.
        assert_eq!(due_count(dispatcher.collect(&ctx.store, &ctx.monitor, at(11, 9, 0))), 1);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_sleep_window_suppresses_without_recording(ctx: &mut DispatcherTestContext) {
        ctx.store.tasks.push(daily_task("00:00"));
        ctx.store.settings.sleep_start = "00:00".to_string();
        ctx.store.settings.sleep_end = "08:00".to_string();
        let mut dispatcher = NotificationDispatcher::new();

        // Inside the window: nothing, and nothing marked as sent.
        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 3, 0)).is_empty());

        // After waking the reminder still arrives for the same cycle.
        let after = dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 9, 0));
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].kind, TriggerKind::Due);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_due_soon_for_rolling_deadline(ctx: &mut DispatcherTestContext) {
        let mut task = ManagedTask::new("Stamina", "");
        task.user_cycle_hours = Some(24);
        task.last_played_timestamp = Some(at(9, 12, 0));
        ctx.store.tasks.push(task);
        ctx.store.settings.cycle_deadline_advance_notify_hours = 2.0;
        let mut dispatcher = NotificationDispatcher::new();

        // Deadline is day 10 at 12:00; at 09:00 it is still too far out.
        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 9, 0)).is_empty());

        let soon = dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 10, 30));
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].kind, TriggerKind::DueSoon);

        // Only once per cycle.
        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 11, 0)).is_empty());
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_before_sleep_reminder_for_unfinished_task(ctx: &mut DispatcherTestContext) {
        ctx.store.tasks.push(daily_task("06:00"));
        ctx.store.settings.sleep_start = "23:00".to_string();
        ctx.store.settings.sleep_end = "07:00".to_string();
        ctx.store.settings.sleep_advance_notify_hours = 1.0;
        let mut dispatcher = NotificationDispatcher::new();

        let notifications = dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 22, 30));
        let kinds: Vec<TriggerKind> = notifications.iter().map(|n| n.kind).collect();
        assert!(kinds.contains(&TriggerKind::Due));
        assert!(kinds.contains(&TriggerKind::BeforeSleep));
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_before_sleep_rearms_each_evening(ctx: &mut DispatcherTestContext) {
        ctx.store.tasks.push(daily_task("06:00"));
        ctx.store.settings.sleep_start = "23:00".to_string();
        ctx.store.settings.sleep_end = "07:00".to_string();
        ctx.store.settings.sleep_advance_notify_hours = 1.0;
        let mut dispatcher = NotificationDispatcher::new();

        let kinds = |list: Vec<Notification>| -> Vec<TriggerKind> { list.iter().map(|n| n.kind).collect() };

        assert!(kinds(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 22, 30))).contains(&TriggerKind::BeforeSleep));
        // Same evening: already reminded.
        assert!(!kinds(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 22, 45))).contains(&TriggerKind::BeforeSleep));
        // Still unfinished the next evening: a fresh reminder.
        assert!(kinds(dispatcher.collect(&ctx.store, &ctx.monitor, at(11, 22, 30))).contains(&TriggerKind::BeforeSleep));
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_completed_task_stays_silent(ctx: &mut DispatcherTestContext) {
        let mut task = daily_task("06:00");
        task.last_played_timestamp = Some(at(10, 8, 0));
        ctx.store.tasks.push(task);
        let mut dispatcher = NotificationDispatcher::new();

        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 9, 0)).is_empty());
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_deleted_record_state_is_dropped(ctx: &mut DispatcherTestContext) {
        ctx.store.tasks.push(daily_task("06:00"));
        let mut dispatcher = NotificationDispatcher::new();

        assert_eq!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 9, 0)).len(), 1);

        // Deleting the task clears its delivery history.
        let task = ctx.store.tasks.pop().unwrap();
        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 10, 0)).is_empty());

        // Restoring it within the same cycle announces it afresh.
        ctx.store.tasks.push(task);
        assert_eq!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 11, 0)).len(), 1);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_red_shortcut_fires_once_per_reset(ctx: &mut DispatcherTestContext) {
        let mut shortcut = WebShortcut::new("Dailies", "https://example.com");
        shortcut.refresh_time = Some("09:00".to_string());
        ctx.store.shortcuts.push(shortcut);
        let mut dispatcher = NotificationDispatcher::new();

        let first = dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 10, 0));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].kind, TriggerKind::Due);

        assert!(dispatcher.collect(&ctx.store, &ctx.monitor, at(10, 12, 0)).is_empty());

        // Next day's refresh re-arms it.
        assert_eq!(dispatcher.collect(&ctx.store, &ctx.monitor, at(11, 10, 0)).len(), 1);
    }
}
