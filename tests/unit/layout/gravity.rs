use super::*;

#[test]
fn exhaustive_placement_table() {
    assert_eq!(resolve_gravity(100.0, 50.0, Some("center")), Point::new(50.0, 25.0));
    assert_eq!(resolve_gravity(100.0, 50.0, Some("north")), Point::new(50.0, 0.0));
    assert_eq!(
        resolve_gravity(100.0, 50.0, Some("south east")),
        Point::new(0.0, 50.0)
    );
    assert_eq!(resolve_gravity(100.0, 50.0, Some("south")), Point::new(50.0, 50.0));
    assert_eq!(resolve_gravity(100.0, 50.0, Some("west")), Point::new(100.0, 25.0));
}

#[test]
fn east_is_zero_offset_west_is_slack() {
    // The canvas left-origin convention, not geographic translation.
    assert_eq!(resolve_gravity(100.0, 50.0, Some("east")), Point::new(0.0, 25.0));
    assert_eq!(resolve_gravity(100.0, 50.0, Some("w")), Point::new(100.0, 25.0));
}

#[test]
fn absent_gravity_centers() {
    assert_eq!(resolve_gravity(100.0, 50.0, None), Point::new(50.0, 25.0));
    assert_eq!(resolve_gravity(100.0, 50.0, Some("")), Point::new(50.0, 25.0));
}

#[test]
fn unmatched_typo_falls_back_to_center() {
    assert_eq!(resolve_gravity(100.0, 50.0, Some("sw")), Point::new(50.0, 25.0));
    assert_eq!(resolve_gravity(100.0, 50.0, Some("up")), Point::new(50.0, 25.0));
}

#[test]
fn tokens_are_case_insensitive_and_order_free() {
    assert_eq!(
        resolve_gravity(100.0, 50.0, Some("East South")),
        Point::new(0.0, 50.0)
    );
    assert_eq!(
        resolve_gravity(100.0, 50.0, Some("N  W")),
        Point::new(100.0, 0.0)
    );
    assert_eq!(resolve_gravity(100.0, 50.0, Some("MIDDLE")), Point::new(50.0, 25.0));
}

#[test]
fn conflicting_or_mixed_tokens_are_rejected() {
    assert!(Gravity::parse("north south").is_none());
    assert!(Gravity::parse("east west").is_none());
    assert!(Gravity::parse("center east").is_none());
    assert_eq!(
        resolve_gravity(100.0, 50.0, Some("north south")),
        Point::new(50.0, 25.0)
    );
}

#[test]
fn single_axis_keywords_center_the_other_axis() {
    assert_eq!(resolve_gravity(80.0, 20.0, Some("n")), Point::new(40.0, 0.0));
    assert_eq!(resolve_gravity(80.0, 20.0, Some("e")), Point::new(0.0, 10.0));
}
