use super::*;

fn at(secs: f64) -> Timestamp {
    Timestamp::from_secs_f64(secs)
}

fn scene() -> Scene {
    Scene::new(&SequenceConfig::default()).unwrap()
}

#[test]
fn rejects_invalid_config() {
    let mut cfg = SequenceConfig::default();
    cfg.burst.count = 0;
    assert!(Scene::new(&cfg).is_err());
}

#[test]
fn intro_shows_star_and_starfield() {
    let mut scene = scene();
    let snap = scene.tick(Some(0.0), at(0.0));
    assert_eq!(snap.tick, 1);
    assert_eq!(snap.timeline.phase, Phase::Intro);
    assert!(snap.star.visible);
    assert!(snap.starfield.visible);
    assert_eq!(snap.starfield.points.len(), 4000);
    assert!(!snap.supernova.visible);
    assert!(!snap.black_hole.visible);
    assert_eq!(snap.caption, Phase::Intro.caption());
}

#[test]
fn star_keeps_spinning() {
    let mut scene = scene();
    for i in 0..10 {
        scene.tick(Some(0.3), at(f64::from(i) * 0.016));
    }
    let rot = scene.snapshot().star.rotation;
    assert!((rot.x - 0.05).abs() < 1e-12);
    assert!((rot.y - 0.08).abs() < 1e-12);
}

#[test]
fn explosion_shows_supernova_with_particles() {
    let mut scene = scene();
    scene.tick(Some(0.3), at(0.0));
    let snap = scene.tick(Some(0.62), at(0.1));
    assert_eq!(snap.timeline.phase, Phase::Explosion);
    assert!(!snap.star.visible);
    assert!(snap.supernova.visible);
    assert_eq!(snap.supernova.particle_count, 300);
    assert_eq!(snap.supernova.particles.len(), 300);
    // Activated and grown once within the same tick.
    assert!((snap.supernova.scale - 1.3).abs() < 1e-12);
    assert!(scene.supernova().burst().is_some());
}

#[test]
fn black_hole_spins_only_while_visible() {
    let mut scene = scene();
    scene.tick(Some(0.3), at(0.0));
    scene.tick(Some(0.62), at(0.1));
    let during = scene.tick(Some(0.62), at(0.5)).black_hole;
    assert!(!during.visible);
    assert_eq!(during.core_rotation, 0.0);

    scene.tick(Some(0.7), at(1.6));
    let after = scene.tick(Some(0.7), at(1.7)).black_hole;
    assert!(after.visible);
    assert!((after.core_rotation - 0.03).abs() < 1e-12);
    assert!((after.ring_rotation + 0.05).abs() < 1e-12);
}

#[test]
fn inside_hides_starfield() {
    let mut scene = scene();
    scene.tick(Some(0.3), at(0.0));
    scene.tick(Some(0.9), at(0.1));
    let snap = scene.tick(Some(0.9), at(1.6));
    assert_eq!(snap.timeline.phase, Phase::Inside);
    assert!(!snap.starfield.visible);
    assert!(snap.black_hole.visible);
    assert_eq!(snap.black_hole.scale, 7.0);
}

#[test]
fn backward_scroll_clears_supernova() {
    let mut scene = scene();
    scene.tick(Some(0.3), at(0.0));
    scene.tick(Some(0.62), at(0.1));
    let snap = scene.tick(Some(0.3), at(0.2));
    assert!(!snap.supernova.visible);
    assert_eq!(snap.supernova.particle_count, 0);
    assert_eq!(snap.supernova.scale, 0.0);
}
