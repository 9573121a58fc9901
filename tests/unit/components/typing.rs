use super::*;
use crate::test_support::portfolio_doc;

fn shown(doc: &Document) -> String {
    doc.get(doc.by_id("typed-text").unwrap()).text().to_owned()
}

#[test]
fn types_then_deletes_with_configured_delays() {
    let mut doc = portfolio_doc();
    let mut t = TypingAnimator::new(&doc, TypingConfig::default()).unwrap();

    assert_eq!(t.step("Hi", &mut doc), 60);
    assert_eq!(shown(&doc), "H");
    assert_eq!(t.step("Hi", &mut doc), 1200);
    assert_eq!(shown(&doc), "Hi");
    assert_eq!(t.phase(), TypingPhase::Deleting);
    assert_eq!(t.step("Hi", &mut doc), 30);
    assert_eq!(shown(&doc), "H");
    assert_eq!(t.step("Hi", &mut doc), 300);
    assert_eq!(shown(&doc), "");
    assert_eq!(t.phase(), TypingPhase::Typing);
    assert_eq!(t.step("Hi", &mut doc), 60);
    assert_eq!(shown(&doc), "H");
}

#[test]
fn source_change_waits_for_next_cycle() {
    let mut doc = portfolio_doc();
    let mut t = TypingAnimator::new(&doc, TypingConfig::default()).unwrap();
    t.step("abc", &mut doc);
    t.step("xyz", &mut doc);
    assert_eq!(shown(&doc), "ab");
    t.step("xyz", &mut doc);
    assert_eq!(shown(&doc), "abc");
    for _ in 0..3 {
        t.step("xyz", &mut doc);
    }
    assert_eq!(shown(&doc), "");
    t.step("xyz", &mut doc);
    assert_eq!(shown(&doc), "x");
}

#[test]
fn multibyte_text_is_sliced_by_char() {
    let mut doc = portfolio_doc();
    let mut t = TypingAnimator::new(&doc, TypingConfig::default()).unwrap();
    t.step("Dé", &mut doc);
    t.step("Dé", &mut doc);
    assert_eq!(shown(&doc), "Dé");
    t.step("Dé", &mut doc);
    assert_eq!(shown(&doc), "D");
}

#[test]
fn empty_source_polls_without_advancing() {
    let mut doc = portfolio_doc();
    let mut t = TypingAnimator::new(&doc, TypingConfig::default()).unwrap();
    assert_eq!(t.step("", &mut doc), 60);
    assert_eq!(t.position(), 0);
    assert_eq!(shown(&doc), "");
}

#[test]
fn scheduler_drives_the_loop_with_a_single_timer() {
    let mut doc = portfolio_doc();
    let mut sched = Scheduler::new();
    let mut t = TypingAnimator::new(&doc, TypingConfig::default()).unwrap();
    t.start(&mut sched);
    t.start(&mut sched);
    assert_eq!(sched.armed_count(TimerKind::Typing), 1);

    let mut run_until = |ms: u64, doc: &mut Document, sched: &mut Scheduler| {
        while let Some(f) = sched.pop_due(ms) {
            t.on_timer(f.id, "Hi", doc, sched);
        }
        sched.advance_to(ms);
    };
    run_until(60, &mut doc, &mut sched);
    assert_eq!(shown(&doc), "Hi");
    run_until(1259, &mut doc, &mut sched);
    assert_eq!(shown(&doc), "Hi");
    run_until(1260, &mut doc, &mut sched);
    assert_eq!(shown(&doc), "H");
    assert_eq!(sched.armed_count(TimerKind::Typing), 1);
}

#[test]
fn stop_cancels_pending_tick() {
    let doc = portfolio_doc();
    let mut sched = Scheduler::new();
    let mut t = TypingAnimator::new(&doc, TypingConfig::default()).unwrap();
    t.start(&mut sched);
    t.stop(&mut sched);
    assert!(!t.is_running());
    assert!(sched.pop_due(10_000).is_none());
}

#[test]
fn zero_pauses_still_move_time_forward() {
    let mut doc = portfolio_doc();
    let mut sched = Scheduler::new();
    let cfg = TypingConfig {
        full_pause_ms: 0,
        empty_pause_ms: 0,
        ..Default::default()
    };
    let mut t = TypingAnimator::new(&doc, cfg).unwrap();
    t.start(&mut sched);

    let mut ticks = 0;
    while let Some(f) = sched.pop_due(100) {
        t.on_timer(f.id, "X", &mut doc, &mut sched);
        ticks += 1;
        assert!(ticks <= 101, "tick loop did not advance the clock");
    }
    assert_eq!(ticks, 101);
    assert_eq!(sched.next_due_ms(), Some(101));
}
