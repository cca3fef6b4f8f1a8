use super::*;

fn supernova() -> Supernova {
    Supernova::new(SupernovaConfig::default(), BurstConfig::default(), 11)
}

#[test]
fn rising_edge_activates_with_fresh_burst() {
    let mut sn = supernova();
    assert!(!sn.is_active());
    assert!(sn.particles().is_empty());

    sn.set_trigger(true);
    assert!(sn.is_active());
    assert_eq!(sn.scale(), 1.0);
    assert_eq!(sn.opacity(), 1.0);
    assert_eq!(sn.particles().len(), 300);
    assert_eq!(sn.activations(), 1);

    // Level, not edge: no second activation.
    sn.set_trigger(true);
    assert_eq!(sn.activations(), 1);
}

#[test]
fn grows_and_fades_each_tick() {
    let mut sn = supernova();
    sn.set_trigger(true);
    sn.tick();
    assert!((sn.scale() - 1.3).abs() < 1e-12);
    assert!((sn.opacity() - 0.98).abs() < 1e-12);
    assert_eq!(sn.burst().map(|b| b.ticks()), Some(1));
}

#[test]
fn burns_out_at_growth_limit() {
    let mut sn = supernova();
    sn.set_trigger(true);
    let mut ticks = 0;
    while sn.is_active() {
        sn.tick();
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert!(sn.scale() >= 15.0);
    assert!((sn.opacity() - 0.06).abs() < 1e-9);
    assert!(sn.particles().is_empty());
    // 47 growth ticks take the shell from 1.0 past 15.0, one more notices it.
    assert_eq!(ticks, 48);
}

#[test]
fn falling_edge_clears_and_reactivation_does_not_drift() {
    let mut sn = supernova();
    sn.set_trigger(true);
    let first = sn.burst().cloned().unwrap();
    for _ in 0..5 {
        sn.tick();
    }

    sn.set_trigger(false);
    assert!(!sn.is_active());
    assert_eq!(sn.scale(), 0.0);
    assert_eq!(sn.opacity(), 1.0);
    assert!(sn.burst().is_none());

    sn.set_trigger(true);
    let second = sn.burst().cloned().unwrap();
    assert_eq!(second.ticks(), 0);
    assert_ne!(first.particles(), second.particles());
    assert_eq!(sn.activations(), 2);
}
