#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, TimeZone};
    use gcycle::libs::formatter::{format_duration, format_optional_timestamp, format_progress};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(30))), "02:30");
        assert_eq!(format_duration(&Duration::minutes(5)), "00:05");
        assert_eq!(format_duration(&Duration::hours(30)), "30:00");
        assert_eq!(format_duration(&Duration::minutes(-10)), "00:00");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_optional_timestamp() {
        let naive = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(9, 5, 0).unwrap();
        let ts = Local.from_local_datetime(&naive).single().unwrap();
        assert_eq!(format_optional_timestamp(&Some(ts)), "2026-03-10 09:05");
        assert_eq!(format_optional_timestamp(&None), "-");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(Some(0)), "0%");
        assert_eq!(format_progress(Some(100)), "100%");
        assert_eq!(format_progress(None), "-");
    }
}
