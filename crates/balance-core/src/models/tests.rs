#[cfg(test)]
mod model_tests {
    use jiff::civil::{date, time};

    use crate::models::{
        schedule::parse_date, Area, Frequency, PreferredWindow, Schedule, ScheduleStatus, Task,
    };

    fn create_test_task() -> Task {
        Task {
            id: "t1".to_string(),
            goal_id: None,
            title: "Drink 2L water".to_string(),
            frequency: Frequency::Daily,
            duration_minutes: 5,
            anchor: true,
            why: None,
            preferred_window: PreferredWindow::Any,
        }
    }

    #[test]
    fn test_area_order_matches_all() {
        let mut sorted = Area::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Area::ALL.to_vec());
        assert_eq!(Area::ALL.first(), Some(&Area::Body));
        assert_eq!(Area::ALL.last(), Some(&Area::Career));
    }

    #[test]
    fn test_area_parsing() {
        assert_eq!("BODY".parse::<Area>(), Ok(Area::Body));
        assert_eq!("food".parse::<Area>(), Ok(Area::Nutrition));
        assert_eq!("Nutrition".parse::<Area>(), Ok(Area::Nutrition));
        assert_eq!("appearance".parse::<Area>(), Ok(Area::Appearance));
        assert!("gardening".parse::<Area>().is_err());
    }

    #[test]
    fn test_area_serializes_as_code() {
        for area in Area::ALL {
            let json = serde_json::to_string(&area).unwrap();
            assert_eq!(json, format!("\"{}\"", area.code()));
        }
    }

    #[test]
    fn test_status_toggle_only_swaps_actionable_states() {
        assert_eq!(ScheduleStatus::Pending.toggled(), ScheduleStatus::Done);
        assert_eq!(ScheduleStatus::Done.toggled(), ScheduleStatus::Pending);
        assert_eq!(ScheduleStatus::Skipped.toggled(), ScheduleStatus::Skipped);
        assert_eq!(ScheduleStatus::Moved.toggled(), ScheduleStatus::Moved);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("DONE".parse::<ScheduleStatus>(), Ok(ScheduleStatus::Done));
        assert_eq!("moved".parse::<ScheduleStatus>(), Ok(ScheduleStatus::Moved));
        assert!("finished".parse::<ScheduleStatus>().is_err());
        assert_eq!("Biweekly".parse::<Frequency>(), Ok(Frequency::Biweekly));
    }

    #[test]
    fn test_schedule_json_shape() {
        let schedule = Schedule::pending("1", create_test_task(), date(2025, 1, 6));
        let value = serde_json::to_value(&schedule).unwrap();

        assert_eq!(value["taskId"], "t1");
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["date"], "2025-01-06");
        assert_eq!(value["task"]["duration"], 5);
        assert_eq!(value["task"]["preferredWindow"], "any");
        assert_eq!(value["task"]["frequency"], "DAILY");
        assert!(value.get("start").is_none());
        assert!(value["task"].get("why").is_none());
    }

    #[test]
    fn test_schedule_with_clock_times() {
        let mut schedule = Schedule::pending("1", create_test_task(), date(2025, 1, 6));
        schedule.start = Some(time(7, 0, 0, 0));
        schedule.end = Some(time(7, 5, 0, 0));

        let json = serde_json::to_string(&schedule).unwrap();
        let decoded: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.start, Some(time(7, 0, 0, 0)));
        assert_eq!(decoded, schedule);
    }

    #[test]
    fn test_schedule_date_accepts_instants_and_datetimes() {
        assert_eq!(parse_date("2025-01-06"), Some(date(2025, 1, 6)));
        assert_eq!(parse_date("2025-01-06T08:15:00.000Z"), Some(date(2025, 1, 6)));
        assert_eq!(parse_date("2025-01-06T23:59:59Z"), Some(date(2025, 1, 6)));
        assert_eq!(parse_date("2025-01-06T08:15:00"), Some(date(2025, 1, 6)));
        assert_eq!(parse_date("next tuesday"), None);

        let decoded: Schedule = serde_json::from_str(
            r#"{"id":"9","taskId":"t1","task":{"id":"t1","goalId":"g1","title":"Stretch",
                "frequency":"DAILY","duration":10,"anchor":false,"preferredWindow":"morning"},
                "date":"2025-01-06T08:15:00.000Z","status":"DONE"}"#,
        )
        .unwrap();
        assert_eq!(decoded.date, date(2025, 1, 6));
        assert_eq!(decoded.task.goal_id.as_deref(), Some("g1"));

        let value = serde_json::to_value(&decoded).unwrap();
        assert_eq!(value["date"], "2025-01-06");
        assert_eq!(value["task"]["goalId"], "g1");
    }

    #[test]
    fn test_task_defaults_when_optional_fields_missing() {
        let task: Task = serde_json::from_str(
            r#"{"id":"9","title":"Budget review","frequency":"MONTHLY","duration":20}"#,
        )
        .unwrap();
        assert!(!task.anchor);
        assert_eq!(task.goal_id, None);
        assert_eq!(task.why, None);
        assert_eq!(task.preferred_window, PreferredWindow::Any);
    }

    #[test]
    fn test_schedule_status_helpers() {
        let schedule = Schedule::pending("1", create_test_task(), date(2025, 1, 6));
        assert!(schedule.is_pending());
        let done = schedule.with_status(ScheduleStatus::Done);
        assert!(done.is_done());
        assert!(!done.is_pending());
    }
}
