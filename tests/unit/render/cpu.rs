use super::*;
use crate::{config::SequenceConfig, foundation::core::Timestamp, scene::Scene};

fn lit_pixels(frame: &FrameRGBA) -> usize {
    frame
        .data
        .chunks_exact(4)
        .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
        .count()
}

#[test]
fn rejects_oversized_or_empty_surfaces() {
    assert!(CpuPreview::new(70_000, 10).is_err());
    assert!(CpuPreview::new(10, 0).is_err());
}

#[test]
fn intro_frame_shows_stars_on_black() {
    let mut scene = Scene::new(&SequenceConfig::default()).unwrap();
    let snap = scene.tick(Some(0.0), Timestamp::ZERO);

    let mut preview = CpuPreview::new(256, 160).unwrap();
    let frame = preview.render(&snap).unwrap();
    assert_eq!((frame.width, frame.height), (256, 160));
    assert_eq!(frame.data.len(), 256 * 160 * 4);
    assert!(frame.premultiplied);

    let lit = lit_pixels(&frame);
    assert!(lit > 0);
    assert!(lit < 256 * 160);
    assert!(preview.frame().is_some());
}

#[test]
fn frame_is_opaque() {
    let mut scene = Scene::new(&SequenceConfig::default()).unwrap();
    let snap = scene.tick(Some(0.1), Timestamp::ZERO);
    let mut preview = CpuPreview::new(32, 32).unwrap();
    let frame = preview.render(&snap).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(frame.pixel(0, 0).map(|px| px[3]), Some(255));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn camera_culls_geometry_behind_it() {
    let cam = Camera {
        z: 15.0,
        focal: 100.0,
        center: Point::new(50.0, 50.0),
        bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
        group_z: 0.0,
    };
    assert!(cam.project(Vec3::new(0.0, 0.0, 20.0)).is_none());
    let (p, d) = cam.project(Vec3::new(1.0, 1.0, -85.0)).unwrap();
    assert_eq!(d, 100.0);
    assert_eq!(p, Point::new(51.0, 49.0));
}
