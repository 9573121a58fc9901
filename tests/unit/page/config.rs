use super::*;
use serde_json::json;

#[test]
fn defaults_match_stock_page() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.default_language, "en");
    assert_eq!(cfg.typing.type_ms, 60);
    assert_eq!(cfg.typing.full_pause_ms, 1200);
    assert_eq!(cfg.typing.delete_ms, 30);
    assert_eq!(cfg.typing.empty_pause_ms, 300);
    assert_eq!(cfg.carousel.period_ms, 4800);
    assert_eq!(cfg.particles.max_count, 140);
    assert!((cfg.reveal_threshold - 0.18).abs() < 1e-12);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg: PageConfig = serde_json::from_value(json!({
        "typing": { "type_ms": 10 },
        "connectors": { "stops": ["#ff0000", "#00ff00", "rgba(0,0,255,0.5)"] }
    }))
    .unwrap();
    assert_eq!(cfg.typing.type_ms, 10);
    assert_eq!(cfg.typing.delete_ms, 30);
    assert_eq!(cfg.connectors.stops[2].to_rgba8(), [0, 0, 255, 128]);
    assert_eq!(cfg.carousel.period_ms, 4800);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = serde_json::from_value::<PageConfig>(json!({ "typing": { "speed": 1 } }));
    assert!(err.is_err());
}

#[test]
fn validation_catches_bad_values() {
    let mut cfg = PageConfig::default();
    cfg.reveal_threshold = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = PageConfig::default();
    cfg.carousel.period_ms = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = PageConfig::default();
    cfg.particles.size_max = 0.1;
    assert!(cfg.validate().is_err());
}

#[test]
fn typing_pauses_may_not_both_be_zero() {
    let mut cfg = PageConfig::default();
    cfg.typing.full_pause_ms = 0;
    cfg.validate().unwrap();
    cfg.typing.empty_pause_ms = 0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("full_pause_ms and empty_pause_ms"));
}
