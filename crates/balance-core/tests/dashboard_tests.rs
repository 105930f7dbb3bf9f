mod common;

use balance_core::{
    Area, AreaGroups, Dashboard, KeyValueStore, ScheduleStatus, SCHEDULES_SLOT,
};
use common::{create_test_store, reopen, today};

#[test]
fn test_fresh_database_shows_builtin_schedules() {
    let (_temp_dir, store) = create_test_store();
    let dashboard = Dashboard::load(store, today());

    assert_eq!(dashboard.schedules().len(), 5);
    assert_eq!(dashboard.completion_ratio(), 0.2);

    let output = AreaGroups(dashboard.groups()).to_string();
    assert!(output.contains("## Body & Health (1/2)"));
    assert!(output.contains("Drink 2L water"));
}

#[test]
fn test_toggle_survives_reopen() {
    let (temp_dir, store) = create_test_store();
    let mut dashboard = Dashboard::load(store, today());
    assert!(dashboard.toggle("1").expect("toggle failed"));
    assert!(dashboard.toggle("2").expect("toggle failed"));
    drop(dashboard);

    let dashboard = Dashboard::load(reopen(&temp_dir), today());
    assert_eq!(dashboard.schedules()[0].status, ScheduleStatus::Done);
    assert_eq!(dashboard.schedules()[1].status, ScheduleStatus::Pending);
    assert_eq!(dashboard.next_pending().map(|s| s.id.as_str()), Some("2"));
}

#[test]
fn test_reset_survives_reopen() {
    let (temp_dir, store) = create_test_store();
    let mut dashboard = Dashboard::load(store, today());
    for id in ["1", "3", "4", "5"] {
        dashboard.toggle(id).expect("toggle failed");
    }
    assert_eq!(dashboard.completion_ratio(), 0.8);
    dashboard.reset().expect("reset failed");
    drop(dashboard);

    let dashboard = Dashboard::load(reopen(&temp_dir), today());
    assert_eq!(dashboard.completion_ratio(), 0.2);
}

#[test]
fn test_corrupt_slot_falls_back_to_builtin() {
    let (temp_dir, mut store) = create_test_store();
    store
        .set(SCHEDULES_SLOT, "{\"broken\": true}")
        .expect("write failed");
    drop(store);

    let dashboard = Dashboard::load(reopen(&temp_dir), today());
    assert_eq!(dashboard.schedules().len(), 5);
    assert_eq!(dashboard.groups()[0].area, Area::Body);
}

#[test]
fn test_dashboard_over_borrowed_store() {
    let (_temp_dir, mut store) = create_test_store();
    {
        let mut dashboard = Dashboard::load(&mut store, today());
        dashboard.toggle("5").expect("toggle failed");
    }
    let raw = store
        .get(SCHEDULES_SLOT)
        .expect("read failed")
        .expect("slot should be written");
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"status\":\"DONE\""));
}
