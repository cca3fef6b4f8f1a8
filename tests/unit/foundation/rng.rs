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
fn derived_streams_differ_per_index() {
    let mut a = Rng64::derive(7, 0);
    let mut b = Rng64::derive(7, 1);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn ranges_stay_in_bounds() {
    let mut rng = Rng64::new(99);
    for _ in 0..1000 {
        let u = rng.next_f64_01();
        assert!((0.0..1.0).contains(&u));
        let s = rng.symmetric(2.0);
        assert!((-2.0..2.0).contains(&s));
        let r = rng.range(-1500.0, 0.0);
        assert!((-1500.0..0.0).contains(&r));
    }
}
