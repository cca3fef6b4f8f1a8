use super::*;

fn at(secs: f64) -> Timestamp {
    Timestamp::from_secs_f64(secs)
}

fn started(secs: f64) -> RecoilAnimator {
    let mut r = RecoilAnimator::new(&RecoilConfig::default());
    r.start(at(secs));
    r
}

#[test]
fn idle_before_start() {
    let r = RecoilAnimator::new(&RecoilConfig::default());
    assert_eq!(r.tick(at(3.0)), RecoilSample::IDLE);
    assert!(!r.is_finished(at(3.0)));
    assert_eq!(r.started_at(), None);
}

#[test]
fn pulse_is_zero_at_both_ends() {
    let r = started(10.0);
    let s0 = r.tick(at(10.0));
    assert!(s0.active);
    assert_eq!(s0.z_offset, 0.0);

    let s1 = r.tick(at(11.5));
    assert!(!s1.active);
    assert_eq!(s1.z_offset, 0.0);
    assert!(r.is_finished(at(11.5)));
}

#[test]
fn pulse_peaks_at_half_duration() {
    let r = started(0.0);
    let mid = r.tick(at(0.75));
    assert!(mid.active);
    assert!((mid.z_offset + 500.0).abs() < 1e-9);

    let quarter = r.tick(at(0.375));
    assert!(quarter.z_offset < 0.0 && quarter.z_offset > -500.0);
}

#[test]
fn progress_clamps_outside_window() {
    let r = started(2.0);
    assert_eq!(r.progress(at(1.0)), 0.0);
    assert_eq!(r.progress(at(100.0)), 1.0);
    assert!((r.progress(at(2.75)) - 0.5).abs() < 1e-12);
}

#[test]
fn custom_duration_and_amplitude() {
    let mut r = RecoilAnimator::new(&RecoilConfig {
        duration_secs: 3.0,
        amplitude: 100.0,
    });
    r.start(at(0.0));
    assert!((r.tick(at(1.5)).z_offset + 100.0).abs() < 1e-9);
    assert!(!r.is_finished(at(2.9)));
    assert!(r.is_finished(at(3.0)));
}

#[test]
fn unbounded_duration_saturates() {
    let mut r = RecoilAnimator::new(&RecoilConfig {
        duration_secs: f64::INFINITY,
        amplitude: 500.0,
    });
    r.start(at(0.0));
    assert!(!r.is_finished(at(1.0e6)));
    assert!(r.tick(at(1.0e6)).active);

    let r = RecoilAnimator::new(&RecoilConfig {
        duration_secs: 1.0e30,
        amplitude: 500.0,
    });
    assert_eq!(r.progress(at(1.0)), 0.0);
}
