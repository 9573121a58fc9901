use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn range_stays_in_half_open_interval() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.range(-0.3, 0.3);
        assert!((-0.3..0.3).contains(&v));
    }
}
