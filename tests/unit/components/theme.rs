use super::*;
use crate::test_support::portfolio_doc;

fn root_classes(doc: &Document) -> Vec<String> {
    let root = doc.first_by_tag("body").unwrap();
    doc.get(root)
        .classes()
        .filter(|c| c.ends_with("-theme"))
        .map(str::to_owned)
        .collect()
}

#[test]
fn starts_dark_with_single_class() {
    let mut doc = portfolio_doc();
    let theme = ThemeController::new(&mut doc).unwrap();
    assert_eq!(theme.mode(), DisplayMode::Dark);
    assert_eq!(root_classes(&doc), vec!["dark-theme"]);
    let toggle = doc.by_id("themeToggle").unwrap();
    assert_eq!(doc.get(toggle).attr("title"), Some("Dark mode"));
    assert!(!doc.get(toggle).has_class("active"));
}

#[test]
fn toggle_flips_and_marks_control() {
    let mut doc = portfolio_doc();
    let mut theme = ThemeController::new(&mut doc).unwrap();
    assert_eq!(theme.toggle(&mut doc), DisplayMode::Light);
    assert_eq!(root_classes(&doc), vec!["light-theme"]);
    let toggle = doc.by_id("themeToggle").unwrap();
    assert!(doc.get(toggle).has_class("active"));
    assert_eq!(doc.get(toggle).attr("title"), Some("Light mode"));

    assert_eq!(theme.toggle(&mut doc), DisplayMode::Dark);
    assert_eq!(root_classes(&doc), vec!["dark-theme"]);
    assert!(!doc.get(toggle).has_class("active"));
}

#[test]
fn apply_is_idempotent_for_same_mode() {
    let mut doc = portfolio_doc();
    let mut theme = ThemeController::new(&mut doc).unwrap();
    theme.apply(&mut doc, DisplayMode::Light);
    theme.apply(&mut doc, DisplayMode::Light);
    assert_eq!(theme.mode(), DisplayMode::Light);
    assert_eq!(root_classes(&doc), vec!["light-theme"]);
}
