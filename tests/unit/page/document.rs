use super::*;
use crate::page::model::ElementDef;

fn el(id: &str, tag: &str, parent: Option<&str>, rect: [f64; 4]) -> ElementDef {
    ElementDef {
        id: Some(id.to_owned()),
        tag: tag.to_owned(),
        parent: parent.map(str::to_owned),
        rect: Some(rect),
        ..Default::default()
    }
}

fn page() -> PageDef {
    PageDef {
        viewport: Viewport {
            width: 400,
            height: 300,
        },
        seed: 0,
        config: Default::default(),
        elements: vec![
            el("main", "main", None, [0.0, 0.0, 400.0, 1000.0]),
            el("strip", "div", Some("main"), [0.0, 500.0, 200.0, 100.0]),
            el("a", "div", Some("strip"), [0.0, 0.0, 150.0, 100.0]),
            el("b", "div", Some("strip"), [150.0, 0.0, 150.0, 100.0]),
        ],
    }
}

#[test]
fn rects_nest_and_follow_scroll() {
    let mut doc = Document::from_def(&page()).unwrap();
    let b = doc.require("b").unwrap();
    let strip = doc.require("strip").unwrap();
    assert_eq!(doc.document_rect(b), Rect::new(150.0, 500.0, 300.0, 600.0));

    doc.set_window_scroll(Vec2::new(0.0, 200.0));
    assert_eq!(doc.client_rect(b), Rect::new(150.0, 300.0, 300.0, 400.0));

    doc.set_element_scroll(strip, Vec2::new(50.0, 0.0));
    assert_eq!(doc.client_rect(b), Rect::new(100.0, 300.0, 250.0, 400.0));
}

#[test]
fn scroll_is_clamped_to_content() {
    let mut doc = Document::from_def(&page()).unwrap();
    doc.set_window_scroll(Vec2::new(-10.0, 5000.0));
    assert_eq!(doc.window_scroll(), Vec2::new(0.0, 700.0));

    let strip = doc.require("strip").unwrap();
    assert_eq!(doc.scroll_range(strip), Vec2::new(100.0, 0.0));
    doc.set_element_scroll(strip, Vec2::new(900.0, 40.0));
    assert_eq!(doc.get(strip).scroll(), Vec2::new(100.0, 0.0));
}

#[test]
fn duplicate_ids_and_dangling_parents_are_rejected() {
    let mut def = page();
    def.elements.push(el("a", "span", None, [0.0; 4]));
    assert!(Document::from_def(&def).is_err());

    let mut def = page();
    def.elements.push(el("z", "span", Some("nope"), [0.0; 4]));
    assert!(Document::from_def(&def).is_err());
}

#[test]
fn missing_required_element_is_a_wiring_error() {
    let doc = Document::from_def(&page()).unwrap();
    let err = doc.require("themeToggle").unwrap_err();
    assert!(matches!(err, FolioError::Wiring(_)));
}

#[test]
fn class_and_text_mutations() {
    let mut doc = Document::from_def(&page()).unwrap();
    let a = doc.require("a").unwrap();
    assert!(doc.add_class(a, "appear"));
    assert!(!doc.add_class(a, "appear"));
    assert_eq!(doc.with_class("appear"), vec![a]);
    doc.toggle_class(a, "appear", false);
    assert!(!doc.get(a).has_class("appear"));
    doc.set_text(a, "hello");
    assert_eq!(doc.get(a).text(), "hello");
    let strip = doc.require("strip").unwrap();
    assert_eq!(doc.children(strip).len(), 2);
}
