use super::*;
use crate::page::config::ScrollConfig;
use crate::test_support::portfolio_doc;

#[test]
fn collects_nav_links() {
    let doc = portfolio_doc();
    assert_eq!(NavLinks::new(&doc).links().len(), 3);
}

#[test]
fn click_scrolls_window_to_target_top() {
    let mut doc = portfolio_doc();
    let nav = NavLinks::new(&doc);
    let mut scroll = ScrollAnimator::new(ScrollConfig::default());
    assert!(nav.click(&doc, &mut scroll, 100, "#projects"));
    assert!(scroll.is_active(ScrollTarget::Window));

    scroll.advance(&mut doc, 300);
    let mid = doc.window_scroll().y;
    assert!(mid > 0.0 && mid < 1700.0);

    scroll.advance(&mut doc, 500);
    assert_eq!(doc.window_scroll(), Vec2::new(0.0, 1700.0));
    assert!(!scroll.is_active(ScrollTarget::Window));
}

#[test]
fn target_near_bottom_is_clamped() {
    let mut doc = portfolio_doc();
    let nav = NavLinks::new(&doc);
    let mut scroll = ScrollAnimator::new(ScrollConfig {
        duration_ms: 0,
        ..Default::default()
    });
    assert!(nav.click(&doc, &mut scroll, 0, "#contact"));
    scroll.advance(&mut doc, 0);
    assert_eq!(doc.window_scroll().y, 2400.0);
}

#[test]
fn unknown_or_missing_targets_are_ignored() {
    let doc = portfolio_doc();
    let nav = NavLinks::new(&doc);
    let mut scroll = ScrollAnimator::new(ScrollConfig::default());
    assert!(!nav.click(&doc, &mut scroll, 0, "#blog"));
    assert!(!nav.click(&doc, &mut scroll, 0, "#about"));
    assert!(!nav.click(&doc, &mut scroll, 0, "https://example.com"));
    assert!(!scroll.is_active(ScrollTarget::Window));
}
