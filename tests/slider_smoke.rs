use vitrine_engine::slider::{Side, SliderCore};

#[test]
fn slider_smoke_full_session() {
    // Portfolio hero strip: 3 project cards, 200px wide, scrolling left.
    let mut slider = SliderCore::new(3, 200.0, 0.0, 2.0, Side::Left);
    slider.set_container_width(1200.0);

    // (1200 + 2*200) / 200 = 8 slides minimum, rounded up to a multiple
    // of the base length.
    assert_eq!(slider.count(), 9);
    assert!(slider.offsets().iter().all(|&o| o == 0.0));

    // A second of autoscroll.
    for _ in 0..60 {
        slider.tick();
    }
    let span = slider.count() as f32 * 200.0;
    let scrolled = slider.offsets()[0].rem_euclid(span);
    assert!((scrolled - (-120.0f32).rem_euclid(span)).abs() < 1e-3);

    // User grabs the strip, flicks it to the right, lets go.
    slider.pointer_down(600.0, 1000.0, 1);
    assert!(!slider.wants_frame(), "frame loop cancelled during drag");
    slider.pointer_move(620.0, 1016.0);
    slider.pointer_move(660.0, 1032.0);
    slider.pointer_up();
    assert!(slider.is_decaying());
    assert!(slider.wants_frame());

    let mut frames = 0;
    while slider.wants_frame() && slider.is_decaying() {
        slider.tick();
        frames += 1;
        assert!(frames < 10_000, "decay terminates");
    }

    // Back to autoscroll after the decay settles.
    assert!(slider.wants_frame());
    let before = slider.offsets()[0];
    slider.tick();
    assert!((slider.offsets()[0] - before).abs() > 0.0);
}

#[test]
fn slider_smoke_offsets_always_match_slide_count() {
    let mut slider = SliderCore::new(5, 120.0, 12.0, 1.0, Side::Right);
    for &width in &[0.0f32, 375.0, 768.0, 1440.0, 2560.0] {
        slider.set_container_width(width);
        assert_eq!(slider.offsets().len(), slider.count());
        assert_eq!(slider.count() % 5, 0);
        slider.tick();
    }
}
