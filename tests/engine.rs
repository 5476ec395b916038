#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
    use gcycle::libs::engine::{
        cycle_deadline, cycle_progress, determine_button_state, determine_task_status, next_cycle_boundary,
        occurrence_key, parse_time_of_day, ButtonState, TaskStatus,
    };
    use gcycle::libs::shortcut::WebShortcut;
    use gcycle::libs::task::ManagedTask;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    fn local(naive: NaiveDateTime) -> DateTime<Local> {
        Local.from_local_datetime(&naive).single().unwrap()
    }

    fn daily_task(reset: &str) -> ManagedTask {
        let mut task = ManagedTask::new("Daily Quest", "/games/quest.exe");
        task.server_reset_time = Some(reset.to_string());
        task
    }

    fn rolling_task(hours: u32) -> ManagedTask {
        let mut task = ManagedTask::new("Stamina", "/games/stamina.exe");
        task.user_cycle_hours = Some(hours);
        task
    }

    #[test]
    fn test_parse_time_of_day() {
        assert!(parse_time_of_day("06:00").is_some());
        assert!(parse_time_of_day(" 23:59 ").is_some());
        assert!(parse_time_of_day("24:00").is_none());
        assert!(parse_time_of_day("6am").is_none());
        assert!(parse_time_of_day("").is_none());
    }

    #[test]
    fn test_daily_completed_exactly_at_reset() {
        let mut task = daily_task("06:00");
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 6, 0, 0)));

        let now = at(2026, 3, 10, 7, 0, 0);
        assert_eq!(determine_task_status(&task, false, now), TaskStatus::Completed);
    }

    #[test]
    fn test_daily_incomplete_one_second_before_reset() {
        let mut task = daily_task("06:00");
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 5, 59, 59)));

        let now = at(2026, 3, 10, 7, 0, 0);
        assert_eq!(determine_task_status(&task, false, now), TaskStatus::Incomplete);
    }

    #[test]
    fn test_daily_completed_before_todays_reset() {
        // Before today's reset passes, yesterday's completion still counts.
        let mut task = daily_task("06:00");
        task.last_played_timestamp = Some(local(at(2026, 3, 9, 20, 0, 0)));

        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 5, 0, 0)), TaskStatus::Completed);
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 7, 0, 0)), TaskStatus::Incomplete);
    }

    #[test]
    fn test_daily_never_played_is_incomplete() {
        let task = daily_task("06:00");
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 12, 0, 0)), TaskStatus::Incomplete);
    }

    #[test]
    fn test_running_overrides_cycle_state() {
        let task = daily_task("06:00");
        assert_eq!(determine_task_status(&task, true, at(2026, 3, 10, 12, 0, 0)), TaskStatus::Running);
    }

    #[test]
    fn test_rolling_incomplete_iff_cycle_elapsed() {
        let mut task = rolling_task(24);
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 10, 0, 0)));

        // One second short of the boundary.
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 11, 9, 59, 59)), TaskStatus::Completed);
        // Exactly at the boundary.
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 11, 10, 0, 0)), TaskStatus::Incomplete);
    }

    #[test]
    fn test_rolling_never_played_is_incomplete() {
        let task = rolling_task(24);
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 12, 0, 0)), TaskStatus::Incomplete);
    }

    #[test]
    fn test_status_is_idempotent_for_fixed_inputs() {
        let mut task = rolling_task(12);
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 10, 0, 0)));
        let now = at(2026, 3, 10, 15, 0, 0);

        let first = determine_task_status(&task, false, now);
        let second = determine_task_status(&task, false, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_cycle_model_is_driven_by_liveness_alone() {
        // Nothing to satisfy, so the task never shows as done.
        let task = ManagedTask::new("Freeform", "/games/freeform.exe");
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 12, 0, 0)), TaskStatus::Incomplete);
        assert_eq!(determine_task_status(&task, true, at(2026, 3, 10, 12, 0, 0)), TaskStatus::Running);
    }

    #[test]
    fn test_malformed_reset_time_degrades_to_incomplete() {
        let mut task = daily_task("6 o'clock");
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 11, 0, 0)));
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 12, 0, 0)), TaskStatus::Incomplete);
    }

    #[test]
    fn test_mandatory_time_satisfied_by_later_completion() {
        let mut task = daily_task("05:00");
        task.mandatory_times = vec!["12:00".to_string(), "18:00".to_string()];
        task.is_mandatory_time_enabled = true;
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 13, 0, 0)));

        // 12:00 has passed and the 13:00 completion covers it.
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 14, 0, 0)), TaskStatus::Completed);
        // 18:00 has now passed too; the 13:00 completion no longer suffices.
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 19, 0, 0)), TaskStatus::Incomplete);
    }

    #[test]
    fn test_future_mandatory_time_imposes_nothing() {
        let mut task = daily_task("05:00");
        task.mandatory_times = vec!["23:00".to_string()];
        task.is_mandatory_time_enabled = true;
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 6, 0, 0)));

        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 12, 0, 0)), TaskStatus::Completed);
    }

    #[test]
    fn test_mandatory_times_ignored_when_disabled() {
        let mut task = daily_task("05:00");
        task.mandatory_times = vec!["12:00".to_string()];
        task.is_mandatory_time_enabled = false;
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 6, 0, 0)));

        assert_eq!(determine_task_status(&task, false, at(2026, 3, 10, 14, 0, 0)), TaskStatus::Completed);
    }

    #[test]
    fn test_mandatory_time_before_reset_rolls_into_next_day() {
        // Cycle starts 22:00; an 06:00 mandatory time belongs to the
        // following morning, inside the same cycle.
        let mut task = daily_task("22:00");
        task.mandatory_times = vec!["06:00".to_string()];
        task.is_mandatory_time_enabled = true;
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 23, 0, 0)));

        assert_eq!(determine_task_status(&task, false, at(2026, 3, 11, 5, 0, 0)), TaskStatus::Completed);
        assert_eq!(determine_task_status(&task, false, at(2026, 3, 11, 7, 0, 0)), TaskStatus::Incomplete);
    }

    #[test]
    fn test_shortcut_without_refresh_time_is_default() {
        let shortcut = WebShortcut::new("Wiki", "https://example.com");
        assert_eq!(determine_button_state(&shortcut, at(2026, 3, 10, 12, 0, 0)), ButtonState::Default);
    }

    #[test]
    fn test_shortcut_malformed_refresh_time_is_default() {
        let mut shortcut = WebShortcut::new("Wiki", "https://example.com");
        shortcut.refresh_time = Some("noonish".to_string());
        assert_eq!(determine_button_state(&shortcut, at(2026, 3, 10, 12, 0, 0)), ButtonState::Default);
    }

    #[test]
    fn test_shortcut_red_right_after_midnight_reset() {
        let mut shortcut = WebShortcut::new("Dailies", "https://example.com");
        shortcut.refresh_time = Some("00:00".to_string());

        assert_eq!(determine_button_state(&shortcut, at(2026, 3, 10, 0, 0, 1)), ButtonState::Red);
    }

    #[test]
    fn test_shortcut_click_flips_red_to_green() {
        let mut shortcut = WebShortcut::new("Dailies", "https://example.com");
        shortcut.refresh_time = Some("09:00".to_string());
        let now = at(2026, 3, 10, 10, 0, 0);

        assert_eq!(determine_button_state(&shortcut, now), ButtonState::Red);
        shortcut.last_reset_timestamp = Some(local(now));
        assert_eq!(determine_button_state(&shortcut, now), ButtonState::Green);
    }

    #[test]
    fn test_shortcut_stale_use_is_red_after_reset() {
        let mut shortcut = WebShortcut::new("Dailies", "https://example.com");
        shortcut.refresh_time = Some("09:00".to_string());
        shortcut.last_reset_timestamp = Some(local(at(2026, 3, 10, 8, 0, 0)));

        assert_eq!(determine_button_state(&shortcut, at(2026, 3, 10, 10, 0, 0)), ButtonState::Red);
    }

    #[test]
    fn test_shortcut_before_reset_green_within_previous_window() {
        let mut shortcut = WebShortcut::new("Dailies", "https://example.com");
        shortcut.refresh_time = Some("09:00".to_string());
        shortcut.last_reset_timestamp = Some(local(at(2026, 3, 9, 10, 0, 0)));

        // Used after yesterday's reset: still green this morning.
        assert_eq!(determine_button_state(&shortcut, at(2026, 3, 10, 8, 0, 0)), ButtonState::Green);
    }

    #[test]
    fn test_shortcut_before_reset_stale_use_is_default() {
        let mut shortcut = WebShortcut::new("Dailies", "https://example.com");
        shortcut.refresh_time = Some("09:00".to_string());
        shortcut.last_reset_timestamp = Some(local(at(2026, 3, 9, 8, 0, 0)));

        assert_eq!(determine_button_state(&shortcut, at(2026, 3, 10, 8, 0, 0)), ButtonState::Default);
    }

    #[test]
    fn test_shortcut_never_used_before_reset_is_default() {
        let mut shortcut = WebShortcut::new("Dailies", "https://example.com");
        shortcut.refresh_time = Some("09:00".to_string());

        assert_eq!(determine_button_state(&shortcut, at(2026, 3, 10, 8, 0, 0)), ButtonState::Default);
    }

    #[test]
    fn test_occurrence_key_stable_within_daily_cycle() {
        let task = daily_task("06:00");

        let morning = occurrence_key(&task, at(2026, 3, 10, 7, 0, 0)).unwrap();
        let evening = occurrence_key(&task, at(2026, 3, 10, 23, 0, 0)).unwrap();
        let next_day = occurrence_key(&task, at(2026, 3, 11, 7, 0, 0)).unwrap();

        assert_eq!(morning, evening);
        assert_ne!(morning, next_day);
        assert_eq!(morning, at(2026, 3, 10, 6, 0, 0));
    }

    #[test]
    fn test_occurrence_key_advances_through_mandatory_instants() {
        let mut task = daily_task("05:00");
        task.mandatory_times = vec!["12:00".to_string()];
        task.is_mandatory_time_enabled = true;

        let before = occurrence_key(&task, at(2026, 3, 10, 11, 0, 0)).unwrap();
        let after = occurrence_key(&task, at(2026, 3, 10, 13, 0, 0)).unwrap();

        assert_eq!(before, at(2026, 3, 10, 5, 0, 0));
        assert_eq!(after, at(2026, 3, 10, 12, 0, 0));
    }

    #[test]
    fn test_occurrence_key_for_never_completed_rolling_task() {
        let task = rolling_task(24);
        assert_eq!(occurrence_key(&task, at(2026, 3, 10, 12, 0, 0)), Some(NaiveDateTime::UNIX_EPOCH));
    }

    #[test]
    fn test_occurrence_key_absent_without_cycle() {
        let task = ManagedTask::new("Freeform", "");
        assert_eq!(occurrence_key(&task, at(2026, 3, 10, 12, 0, 0)), None);
    }

    #[test]
    fn test_cycle_deadline_for_rolling_task() {
        let mut task = rolling_task(12);
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 10, 0, 0)));
        assert_eq!(cycle_deadline(&task), Some(at(2026, 3, 10, 22, 0, 0)));

        assert_eq!(cycle_deadline(&rolling_task(12)), None);
        assert_eq!(cycle_deadline(&daily_task("06:00")), None);
    }

    #[test]
    fn test_next_cycle_boundary() {
        let daily = daily_task("06:00");
        assert_eq!(next_cycle_boundary(&daily, at(2026, 3, 10, 7, 0, 0)), Some(at(2026, 3, 11, 6, 0, 0)));
        assert_eq!(next_cycle_boundary(&daily, at(2026, 3, 10, 5, 0, 0)), Some(at(2026, 3, 10, 6, 0, 0)));

        let mut rolling = rolling_task(12);
        assert_eq!(next_cycle_boundary(&rolling, at(2026, 3, 10, 7, 0, 0)), None);
        rolling.last_played_timestamp = Some(local(at(2026, 3, 10, 10, 0, 0)));
        assert_eq!(next_cycle_boundary(&rolling, at(2026, 3, 10, 12, 0, 0)), Some(at(2026, 3, 10, 22, 0, 0)));

        assert_eq!(next_cycle_boundary(&ManagedTask::new("Freeform", ""), at(2026, 3, 10, 7, 0, 0)), None);
    }

    #[test]
    fn test_cycle_progress() {
        let mut task = rolling_task(10);
        task.last_played_timestamp = Some(local(at(2026, 3, 10, 10, 0, 0)));
        assert_eq!(cycle_progress(&task, at(2026, 3, 10, 15, 0, 0)), Some(50));
        assert_eq!(cycle_progress(&task, at(2026, 3, 12, 15, 0, 0)), Some(100));

        let daily = daily_task("06:00");
        assert_eq!(cycle_progress(&daily, at(2026, 3, 10, 18, 0, 0)), Some(50));

        assert_eq!(cycle_progress(&ManagedTask::new("Freeform", ""), at(2026, 3, 10, 18, 0, 0)), None);
    }
}
