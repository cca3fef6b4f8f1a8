use super::*;

#[test]
fn paged_scroll_maps_last_page_to_end() {
    let mut scroll = PagedScroll::new(50, 800.0, 0.0);
    assert_eq!(scroll.max_scroll_px(), 49.0 * 800.0);
    scroll.scroll_to(1e9);
    assert_eq!(scroll.sample(), Some(1.0));
    scroll.scroll_to(-10.0);
    assert_eq!(scroll.sample(), Some(0.0));
}

#[test]
fn paged_scroll_converges_with_damping() {
    let mut scroll = PagedScroll::from_config(&ScrollConfig::default(), 1000.0);
    scroll.scroll_by(24_500.0);

    let first = scroll.sample().unwrap();
    assert!((first - 0.45).abs() < 1e-12);

    let mut last = first;
    for _ in 0..32 {
        let v = scroll.sample().unwrap();
        assert!(v >= last);
        last = v;
    }
    assert!(scroll.is_settled());
    assert_eq!(last, 0.5);
}

#[test]
fn paged_scroll_ignores_non_finite_targets() {
    let mut scroll = PagedScroll::new(10, 100.0, 0.0);
    scroll.scroll_to(300.0);
    scroll.scroll_to(f64::NAN);
    assert_eq!(scroll.target_px(), 300.0);
}

#[test]
fn scripted_scroll_replays_then_holds() {
    let script = ScrollScript {
        frames: vec![
            ScriptFrame {
                offset: None,
                at_secs: 0.0,
            },
            ScriptFrame {
                offset: Some(0.3),
                at_secs: 0.5,
            },
        ],
    };
    let mut scroll = ScriptedScroll::new(script);
    assert_eq!(scroll.next_time(), Some(Timestamp::ZERO));
    assert_eq!(scroll.sample(), None);
    assert_eq!(scroll.next_time(), Some(Timestamp::from_secs_f64(0.5)));
    assert_eq!(scroll.sample(), Some(0.3));
    assert!(scroll.is_finished());
    assert_eq!(scroll.remaining(), 0);
    assert_eq!(scroll.sample(), Some(0.3));
}
