mod common;

use balance_core::{
    handle_load_onboarding, handle_onboarding, handle_save_onboarding, Area, BalanceError,
    Intensity, OnboardingAnswers, WindowPreset,
};
use common::{create_test_store, reopen};

fn answers() -> OnboardingAnswers {
    OnboardingAnswers {
        areas: vec![Area::Sleep, Area::Finance],
        priorities: vec![(Area::Sleep, 9), (Area::Finance, 4), (Area::Career, 2)],
        windows: vec![(0, WindowPreset::Lunch)],
        clear_default_windows: true,
    }
}

#[test]
fn test_onboarding_result_survives_reopen() {
    let (temp_dir, mut store) = create_test_store();
    assert!(handle_load_onboarding(&store)
        .expect("read failed")
        .is_none());

    let data = handle_onboarding(&answers()).expect("onboarding failed");
    handle_save_onboarding(&mut store, &data).expect("save failed");
    drop(store);

    let loaded = handle_load_onboarding(&reopen(&temp_dir))
        .expect("read failed")
        .expect("onboarding should be stored");
    assert_eq!(loaded, data);
    assert_eq!(loaded.selected_areas, vec![Area::Sleep, Area::Finance]);
    // priorities for unselected areas are dropped
    assert!(!loaded.priorities.contains_key(&Area::Career));
    assert_eq!(loaded.availabilities, vec!["0:lunch"]);
    assert_eq!(loaded.available_minutes(), 60);
    assert_eq!(loaded.intensity, Intensity::Moderate);
}

#[test]
fn test_onboarding_json_shape() {
    let data = handle_onboarding(&answers()).expect("onboarding failed");
    let value = serde_json::to_value(&data).expect("serialize failed");

    assert_eq!(value["selectedAreas"], serde_json::json!(["SLEEP", "FINANCE"]));
    assert_eq!(value["priorities"]["SLEEP"], 9);
    assert_eq!(value["weeklyMinutes"], 0);
    assert_eq!(value["availabilities"], serde_json::json!(["0:lunch"]));
}

#[test]
fn test_onboarding_without_areas_is_rejected() {
    let err = handle_onboarding(&OnboardingAnswers {
        areas: Vec::new(),
        ..answers()
    })
    .expect_err("should be blocked");
    assert!(matches!(err, BalanceError::InvalidInput { ref field, .. } if field == "areas"));
}
