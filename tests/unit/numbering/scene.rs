use super::*;

#[test]
fn unlocked_scene_uses_one_based_position() {
    assert_eq!(scene_number(NumberLock::Auto, 0), 1);
    assert_eq!(scene_number(NumberLock::Auto, 1), 2);
    assert_eq!(scene_number(NumberLock::Auto, 2483), 2484);
}

#[test]
fn locked_number_overrides_position() {
    assert_eq!(scene_number(NumberLock::Locked(3), 0), 3);
    assert_eq!(scene_number(NumberLock::Locked(123), 1), 123);
    assert_eq!(scene_number(NumberLock::Locked(3), 2483), 3);
}

#[test]
fn sequence_resolution_mixes_locked_and_positional() {
    let locks = [
        NumberLock::Auto,
        NumberLock::Locked(7),
        NumberLock::Auto,
        NumberLock::Auto,
    ];
    assert_eq!(resolve_scene_numbers(&locks), vec![1, 7, 3, 4]);
    assert!(resolve_scene_numbers(&[]).is_empty());
}
