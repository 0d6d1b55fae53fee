use super::*;

#[test]
fn validate_rejects_zero_dimension() {
    assert!(CardSpec::new(0).validate().is_err());
    assert!(CardSpec::new(300).validate().is_ok());
}

#[test]
fn json_defaults_match_the_original_page() {
    let spec: CardSpec = serde_json::from_str(r#"{ "dimension": 300 }"#).unwrap();

    assert_eq!(spec.dimension, 300);
    assert!(spec.title.is_none());
    assert!(spec.background_source.is_none());
    assert_eq!(spec.foreground_color, ColorDef::rgba(0.0, 0.0, 0.0, 1.0));
    assert_eq!(spec.background_color, ColorDef::rgba(1.0, 1.0, 1.0, 0.7));
    assert_eq!(spec.pattern_seed, "linkcard");
}

#[test]
fn json_roundtrip_preserves_sources() {
    let mut spec = CardSpec::new(512);
    spec.title = Some("line one\nline two".to_string());
    spec.background_source = Some("photo.jpg".to_string());
    spec.gravity = Some("south east".to_string());

    let json = serde_json::to_string(&spec).unwrap();
    let back: CardSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back.dimension, 512);
    assert_eq!(back.title.as_deref(), Some("line one\nline two"));
    assert_eq!(back.background_source.as_deref(), Some("photo.jpg"));
    assert_eq!(back.gravity.as_deref(), Some("south east"));
}

#[test]
fn title_lines_split_on_newlines() {
    let mut spec = CardSpec::new(300);
    assert!(spec.title_lines().is_none());

    spec.title = Some(String::new());
    assert!(spec.title_lines().is_none());

    spec.title = Some("one\ntwo\nthree".to_string());
    assert_eq!(spec.title_lines().unwrap(), vec!["one", "two", "three"]);

    spec.title = Some("single".to_string());
    assert_eq!(spec.title_lines().unwrap(), vec!["single"]);
}
