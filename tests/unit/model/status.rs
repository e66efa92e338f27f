use super::*;

#[test]
fn primary_action_advances_towards_animated() {
    assert_eq!(ShotStatus::Unsure.next(), ShotStatus::Default);
    assert_eq!(ShotStatus::Default.next(), ShotStatus::Wip);
    assert_eq!(ShotStatus::Wip.next(), ShotStatus::Animated);
    assert_eq!(ShotStatus::Animated.next(), ShotStatus::Animated);
}

#[test]
fn secondary_action_toggles_unsure() {
    assert_eq!(ShotStatus::Default.toggled_unsure(), ShotStatus::Unsure);
    assert_eq!(ShotStatus::Wip.toggled_unsure(), ShotStatus::Unsure);
    assert_eq!(ShotStatus::Unsure.toggled_unsure(), ShotStatus::Default);
    assert_eq!(ShotStatus::Animated.toggled_unsure(), ShotStatus::Default);
}

#[test]
fn only_work_in_progress_and_done_lock_numbers() {
    assert!(!ShotStatus::Default.locks_number());
    assert!(!ShotStatus::Unsure.locks_number());
    assert!(ShotStatus::Wip.locks_number());
    assert!(ShotStatus::Animated.locks_number());
}

#[test]
fn names_round_trip_through_serde_and_from_str() {
    for status in ShotStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
        assert_eq!(status.as_str().parse::<ShotStatus>().unwrap(), status);
    }
    assert_eq!("WIP".parse::<ShotStatus>().unwrap(), ShotStatus::Wip);
    assert!("done".parse::<ShotStatus>().is_err());
}

#[test]
fn filter_normalizes_into_display_order() {
    let filter = StatusFilter::only([
        ShotStatus::Animated,
        ShotStatus::Default,
        ShotStatus::Animated,
        ShotStatus::Unsure,
    ])
    .unwrap();
    assert_eq!(
        filter.statuses(),
        &[ShotStatus::Default, ShotStatus::Unsure, ShotStatus::Animated]
    );
    assert!(filter.shows(ShotStatus::Unsure));
    assert!(!filter.shows(ShotStatus::Wip));
}

#[test]
fn empty_filter_shows_everything() {
    let filter = StatusFilter::all();
    assert!(filter.is_empty());
    for status in ShotStatus::ALL {
        assert!(filter.shows(status));
    }
}
