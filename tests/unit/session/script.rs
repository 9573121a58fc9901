use super::*;

#[test]
fn steps_are_sorted_stably() {
    let json = r#"[
        {"at_ms": 500, "event": {"type": "theme_toggle"}},
        {"at_ms": 100, "event": {"type": "language_change", "code": "fr"}},
        {"at_ms": 100, "event": {"type": "carousel_next"}}
    ]"#;
    let script = Script::from_reader(json.as_bytes()).unwrap();
    let times: Vec<u64> = script.steps().iter().map(|s| s.at_ms).collect();
    assert_eq!(times, [100, 100, 500]);
    assert_eq!(script.steps()[1].event, PageEvent::CarouselNext);
}

#[test]
fn bad_json_is_a_serde_error() {
    let err = Script::from_reader(r#"[{"at_ms": 1}]"#.as_bytes()).unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)));
    let err = Script::from_reader(r#"[{"at_ms": 1, "event": {"type": "jump"}}]"#.as_bytes())
        .unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn missing_file_is_reported() {
    let err = Script::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open script JSON"));
}

#[test]
fn empty_script() {
    assert!(Script::from_reader("[]".as_bytes()).unwrap().is_empty());
}
