use super::*;
use serde_json::json;

#[test]
fn events_are_tagged_by_type() {
    let ev: PageEvent =
        serde_json::from_value(json!({"type": "language_change", "code": "fr"})).unwrap();
    assert_eq!(
        ev,
        PageEvent::LanguageChange {
            code: "fr".to_owned()
        }
    );
    let ev: PageEvent = serde_json::from_value(json!({"type": "theme_toggle"})).unwrap();
    assert_eq!(ev, PageEvent::ThemeToggle);
    assert!(serde_json::from_value::<PageEvent>(json!({"type": "explode"})).is_err());
}
