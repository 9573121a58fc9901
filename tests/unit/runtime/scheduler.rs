use super::*;

#[test]
fn timeouts_fire_in_due_then_arming_order() {
    let mut s = Scheduler::new();
    let late = s.set_timeout(TimerKind::Typing, 50);
    let a = s.set_timeout(TimerKind::Typing, 10);
    let b = s.set_timeout(TimerKind::CarouselAuto, 10);

    assert_eq!(s.pop_due(100).map(|f| f.id), Some(a));
    assert_eq!(s.pop_due(100).map(|f| f.id), Some(b));
    let f = s.pop_due(100).unwrap();
    assert_eq!(f.id, late);
    assert_eq!(f.at_ms, 50);
    assert_eq!(s.now_ms(), 50);
    assert!(s.pop_due(100).is_none());
}

#[test]
fn nothing_fires_before_due() {
    let mut s = Scheduler::new();
    s.set_timeout(TimerKind::Typing, 60);
    assert!(s.pop_due(59).is_none());
    assert_eq!(s.next_due_ms(), Some(60));
    assert!(s.pop_due(60).is_some());
}

#[test]
fn intervals_rearm_under_same_handle() {
    let mut s = Scheduler::new();
    let id = s.set_interval(TimerKind::CarouselAuto, 4800);
    let fired: Vec<u64> = std::iter::from_fn(|| s.pop_due(15_000).map(|f| f.at_ms)).collect();
    assert_eq!(fired, vec![4800, 9600, 14_400]);
    assert!(s.is_armed(id));
    assert_eq!(s.armed_count(TimerKind::CarouselAuto), 1);
}

#[test]
fn cleared_timers_never_fire() {
    let mut s = Scheduler::new();
    let id = s.set_interval(TimerKind::CarouselAuto, 10);
    assert!(s.clear(id));
    assert!(!s.clear(id));
    assert!(s.pop_due(1000).is_none());
    assert_eq!(s.armed_count(TimerKind::CarouselAuto), 0);
}

#[test]
fn clock_is_monotonic() {
    let mut s = Scheduler::new();
    s.advance_to(100);
    s.advance_to(40);
    assert_eq!(s.now_ms(), 100);
    s.set_timeout(TimerKind::Typing, 0);
    assert_eq!(s.pop_due(100).map(|f| f.at_ms), Some(100));
}
