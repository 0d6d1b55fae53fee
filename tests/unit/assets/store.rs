use super::*;
use crate::card::model::CardSpec;

#[test]
fn normalize_cleans_separators_and_dot_segments() {
    assert_eq!(normalize_rel_path("a/./b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a//b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b\\c.png").unwrap(), "a/b/c.png");
}

#[test]
fn normalize_rejects_escapes() {
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("a/../b.png").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn unreadable_sources_leave_slots_empty() {
    let mut spec = CardSpec::new(300);
    spec.background_source = Some("does-not-exist.png".to_string());
    spec.avatar_source = Some("also-missing.png".to_string());
    spec.font_source = Some("missing.ttf".to_string());

    let assets = PreparedCardAssets::prepare(&spec, std::env::temp_dir()).unwrap();
    assert!(assets.background().is_none());
    assert!(assets.avatar().is_none());
    assert!(assets.font().is_none());
}

#[test]
fn from_parts_exposes_slots() {
    let img = PreparedImage {
        width: 2,
        height: 2,
        rgba8_premul: std::sync::Arc::new(vec![0u8; 16]),
    };
    let assets = PreparedCardAssets::from_parts(Some(img), None, None);
    assert!(assets.background().is_some());
    assert!(assets.avatar().is_none());
    assert!(assets.font().is_none());
}
