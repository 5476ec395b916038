#[cfg(test)]
mod tests {
    use chrono::Local;
    use gcycle::libs::data_storage::DataStorage;
    use gcycle::libs::liveness::{LivenessMonitor, ProcessProbe};
    use gcycle::libs::store::TaskStore;
    use gcycle::libs::task::ManagedTask;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Probe scripted from the outside: a path is "running" while it is
    /// in the shared set.
    struct ScriptedProbe {
        running: Arc<Mutex<HashSet<String>>>,
    }

    impl ProcessProbe for ScriptedProbe {
        fn refresh(&mut self) {}
        fn is_process_running(&mut self, path: &str) -> bool {
            self.running.lock().unwrap().contains(path)
        }
    }

    struct LivenessTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
        monitor: LivenessMonitor,
        running: Arc<Mutex<HashSet<String>>>,
    }

    impl TestContext for LivenessTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            let running = Arc::new(Mutex::new(HashSet::new()));
            let probe = ScriptedProbe { running: running.clone() };
            LivenessTestContext {
                _temp_dir: temp_dir,
                store: TaskStore::with_storage(DataStorage::new()),
                monitor: LivenessMonitor::new(Box::new(probe)),
                running,
            }
        }
    }

    fn set_running(ctx: &LivenessTestContext, path: &str, running: bool) {
        let mut set = ctx.running.lock().unwrap();
        if running {
            set.insert(path.to_string());
        } else {
            set.remove(path);
        }
    }

    #[test_context(LivenessTestContext)]
    #[test]
    fn test_start_edge_flags_change_without_writing(ctx: &mut LivenessTestContext) {
        let task = ManagedTask::new("Quest", "/games/quest.exe");
        let id = task.id.clone();
        ctx.store.tasks.push(task);

        set_running(ctx, "/games/quest.exe", true);
        let changed = ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now());

        assert!(changed);
        assert!(ctx.monitor.is_running(&id));
        assert!(ctx.store.find_task(&id).unwrap().last_played_timestamp.is_none());
    }

    #[test_context(LivenessTestContext)]
    #[test]
    fn test_stop_edge_records_completion(ctx: &mut LivenessTestContext) {
        let task = ManagedTask::new("Quest", "/games/quest.exe");
        let id = task.id.clone();
        ctx.store.tasks.push(task);

        set_running(ctx, "/games/quest.exe", true);
        ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now());

        set_running(ctx, "/games/quest.exe", false);
        let stopped_at = Local::now();
        let changed = ctx.monitor.check_and_update_statuses(&mut ctx.store, stopped_at);

        assert!(changed);
        assert!(!ctx.monitor.is_running(&id));
        assert_eq!(ctx.store.find_task(&id).unwrap().last_played_timestamp, Some(stopped_at));
    }

    #[test_context(LivenessTestContext)]
    #[test]
    fn test_steady_state_reports_no_change(ctx: &mut LivenessTestContext) {
        let task = ManagedTask::new("Quest", "/games/quest.exe");
        ctx.store.tasks.push(task);

        // Never running: no edges either way.
        assert!(!ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now()));

        set_running(ctx, "/games/quest.exe", true);
        assert!(ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now()));
        // Still running: the second tick is quiet.
        assert!(!ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now()));
    }

    #[test_context(LivenessTestContext)]
    #[test]
    fn test_tasks_without_monitoring_path_are_skipped(ctx: &mut LivenessTestContext) {
        ctx.store.tasks.push(ManagedTask::new("Manual", ""));
        assert!(!ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now()));
    }

    #[test_context(LivenessTestContext)]
    #[test]
    fn test_deleted_task_is_forgotten(ctx: &mut LivenessTestContext) {
        let task = ManagedTask::new("Quest", "/games/quest.exe");
        let id = task.id.clone();
        ctx.store.tasks.push(task);

        set_running(ctx, "/games/quest.exe", true);
        ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now());
        assert!(ctx.monitor.is_running(&id));

        ctx.store.tasks.clear();
        ctx.monitor.check_and_update_statuses(&mut ctx.store, Local::now());
        assert!(!ctx.monitor.is_running(&id));
    }
}
