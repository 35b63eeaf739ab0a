use super::position::{
    advance, build_replicated_slides, initial_offsets, replicated_count, slide_bounds, Bounds,
};
use super::{Side, SliderCore, ANIMATE_THRESHOLD, FRICTION, STOP_THRESHOLD};

fn bounds_for(offsets: &[f32], slide_width: f32, gap: f32) -> Vec<Bounds> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &off)| slide_bounds(i, off, slide_width, gap))
        .collect()
}

#[test]
fn replication_covers_container_plus_two_slides() {
    for &(container, width, base) in &[
        (1200.0f32, 200.0f32, 3usize),
        (375.0, 120.0, 5),
        (2560.0, 80.0, 2),
        (1.0, 500.0, 7),
    ] {
        let count = replicated_count(base, container, width);
        assert!(
            count as f32 * width >= container + 2.0 * width,
            "count {count} too small for container {container} width {width}"
        );
        assert_eq!(count % base, 0, "count must be a multiple of the base length");
    }
}

#[test]
fn replication_end_to_end_scenario() {
    // 1200px container, 200px slides: at least (1200 + 400) / 200 = 8
    // slides, rounded up to a multiple of the base length.
    let base = vec!["a", "b", "c"];
    let slides = build_replicated_slides(&base, 1200.0, 200.0);
    assert!(slides.len() >= 8);
    assert_eq!(slides.len() % base.len(), 0);
    assert_eq!(slides.len(), 9);
    assert_eq!(slides[3], "a");
}

#[test]
fn replication_degenerate_inputs_return_base() {
    let base = vec![1, 2, 3];
    assert_eq!(build_replicated_slides(&base, 0.0, 200.0), base);
    assert_eq!(build_replicated_slides(&base, -5.0, 200.0), base);
    let empty: Vec<i32> = Vec::new();
    assert!(build_replicated_slides(&empty, 1200.0, 200.0).is_empty());
}

#[test]
fn advance_zero_delta_is_identity() {
    let mut offsets = vec![3.0, -40.0, 17.5];
    let before = offsets.clone();
    let bounds = bounds_for(&offsets, 100.0, 10.0);
    advance(
        &mut offsets,
        0.0,
        &bounds,
        Bounds::new(0.0, 500.0),
        3,
        10.0,
    );
    assert_eq!(offsets, before);
}

#[test]
fn advance_wraps_leftmost_slide_forward_when_moving_left() {
    // 4 slides of 100px, gap 10, container 500px. Slide 0 sits at [0, 100];
    // a -101 delta pushes its right edge past the left container edge.
    let slide_count = 4;
    let (w, gap) = (100.0, 10.0);
    let mut offsets = initial_offsets(slide_count);
    let bounds = bounds_for(&offsets, w, gap);
    advance(
        &mut offsets,
        -101.0,
        &bounds,
        Bounds::new(0.0, 500.0),
        slide_count,
        gap,
    );
    let span = slide_count as f32 * (w + gap);
    assert_eq!(offsets[0], -101.0 + span);
    // Slides still inside just translate.
    assert_eq!(offsets[1], -101.0);
    assert_eq!(offsets[3], -101.0);
}

#[test]
fn advance_wraps_rightmost_slide_backward_when_moving_right() {
    // Slide 3 sits at [330, 430] in a 400px container; +71 pushes its left
    // edge past the right container edge.
    let slide_count = 4;
    let (w, gap) = (100.0, 10.0);
    let mut offsets = initial_offsets(slide_count);
    let bounds = bounds_for(&offsets, w, gap);
    advance(
        &mut offsets,
        71.0,
        &bounds,
        Bounds::new(0.0, 400.0),
        slide_count,
        gap,
    );
    let span = slide_count as f32 * (w + gap);
    assert_eq!(offsets[3], 71.0 - span);
    assert_eq!(offsets[0], 71.0);
}

#[test]
fn advance_conserves_position_modulo_loop_length() {
    let slide_count = 5;
    let (w, gap) = (120.0, 8.0);
    let span = slide_count as f32 * (w + gap);
    let container = Bounds::new(0.0, 600.0);

    let mut offsets = initial_offsets(slide_count);
    for &delta in &[-37.0f32, -250.0, 12.0, 480.0, -5.5] {
        let before = offsets.clone();
        let bounds = bounds_for(&offsets, w, gap);
        advance(&mut offsets, delta, &bounds, container, slide_count, gap);
        for i in 0..slide_count {
            let expected = (before[i] + delta).rem_euclid(span);
            let got = offsets[i].rem_euclid(span);
            assert!(
                (expected - got).abs() < 1e-3,
                "slide {i}: {got} != {expected} (mod {span})"
            );
        }
    }
}

#[test]
fn single_slide_never_wraps_twice_in_one_frame() {
    // slide_count == 1: the wrap amount degenerates to width + gap. A
    // frame delta smaller than that span must trigger at most one wrap.
    let (w, gap) = (100.0, 10.0);
    let span = w + gap;
    let container = Bounds::new(0.0, 90.0);
    let mut offsets = initial_offsets(1);
    for _ in 0..500 {
        let before = offsets[0];
        let bounds = bounds_for(&offsets, w, gap);
        advance(&mut offsets, -9.0, &bounds, container, 1, gap);
        let moved = offsets[0] - before;
        // Either a plain translate or exactly one wrap forward.
        assert!(
            (moved - -9.0).abs() < 1e-3 || (moved - (span - 9.0)).abs() < 1e-3,
            "unexpected movement {moved}"
        );
    }
}

#[test]
fn autoscroll_moves_only_when_gate_is_open() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 2.0, Side::Left);
    core.set_container_width(1200.0);

    core.tick();
    assert_eq!(core.offsets()[0], -2.0);

    core.set_hovered(true);
    core.tick();
    assert_eq!(core.offsets()[0], -2.0, "hover pauses autoscroll");
    assert!(!core.wants_frame());

    core.set_hovered(false);
    core.set_visible(false);
    core.tick();
    assert_eq!(core.offsets()[0], -2.0, "off-screen sliders do not move");
    assert!(!core.wants_frame());

    core.set_visible(true);
    assert!(core.wants_frame());
}

#[test]
fn speed_zero_disables_autoscroll_but_not_dragging() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 0.0, Side::Right);
    core.set_container_width(1200.0);
    assert!(!core.wants_frame());

    core.tick();
    assert_eq!(core.offsets()[0], 0.0);

    core.pointer_down(100.0, 0.0, 1);
    core.pointer_move(130.0, 16.0);
    assert_eq!(core.offsets()[0], 30.0);
}

#[test]
fn side_controls_autoscroll_direction() {
    let mut left = SliderCore::new(3, 200.0, 0.0, 1.5, Side::Left);
    left.set_container_width(1200.0);
    left.tick();
    assert_eq!(left.offsets()[1], -1.5);

    let mut right = SliderCore::new(3, 200.0, 0.0, 1.5, Side::Right);
    right.set_container_width(1200.0);
    right.tick();
    assert_eq!(right.offsets()[1], 1.5);
}

#[test]
fn drag_applies_deltas_immediately_and_pauses_autoscroll() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 2.0, Side::Left);
    core.set_container_width(1200.0);

    core.pointer_down(500.0, 0.0, 1);
    assert!(core.is_dragging());
    assert!(!core.wants_frame());

    core.pointer_move(480.0, 16.0);
    assert_eq!(core.offsets()[0], -20.0);

    // Ticks during a drag do not double-apply movement.
    core.tick();
    assert_eq!(core.offsets()[0], -20.0);
}

#[test]
fn slow_release_goes_straight_to_idle() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 0.0, Side::Left);
    core.set_container_width(1200.0);

    core.pointer_down(100.0, 0.0, 1);
    // ~0.005 px/ms -> well under ANIMATE_THRESHOLD after the multiplier.
    core.pointer_move(100.1, 32.0);
    core.pointer_up();
    assert!(!core.is_decaying());
    assert!(!core.is_dragging());
}

#[test]
fn flick_release_decays_to_rest() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 0.0, Side::Left);
    core.set_container_width(1200.0);

    core.pointer_down(100.0, 0.0, 1);
    core.pointer_move(140.0, 16.0); // 2.5 px/ms: a real flick
    core.pointer_up();
    assert!(core.is_decaying());

    // Replay the friction series on the side and check the slider applied
    // exactly that distance, modulo the loop length (long decays wrap).
    let before = core.offsets()[0];
    let mut v = core.decay_velocity();
    let mut expected = 0.0f32;
    let mut frames = 0;
    while core.is_decaying() {
        v *= FRICTION;
        if v.abs() > STOP_THRESHOLD {
            expected += v;
        }
        core.tick();
        frames += 1;
        assert!(frames < 10_000, "decay must terminate");
    }
    let span = core.count() as f32 * 200.0;
    let got = core.offsets()[0].rem_euclid(span);
    let want = (before + expected).rem_euclid(span);
    assert!((got - want).abs() < 0.05, "decayed {got}, expected {want}");
    assert!(!core.wants_frame());
}

#[test]
fn decay_step_count_is_bounded_by_friction_math() {
    // |v| * FRICTION^n <= STOP_THRESHOLD within ceil(log(stop/v)/log(f)).
    for &v0 in &[1.0f32, 8.0, 64.0, 512.0] {
        assert!(v0 > ANIMATE_THRESHOLD);
        let bound = ((STOP_THRESHOLD / v0).ln() / FRICTION.ln()).ceil() as u32;
        let mut v = v0;
        let mut steps = 0;
        while v.abs() > STOP_THRESHOLD {
            v *= FRICTION;
            steps += 1;
        }
        assert!(steps <= bound + 1, "{steps} steps for v0={v0}, bound {bound}");
    }
}

#[test]
fn second_contact_point_is_ignored() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 0.0, Side::Left);
    core.set_container_width(1200.0);

    core.pointer_down(100.0, 0.0, 1);
    core.pointer_move(120.0, 16.0);
    assert!(core.is_dragging());
    let offsets = core.offsets().to_vec();

    // Second finger lands mid-drag: no restart, no positional jump, the
    // first pointer keeps driving.
    core.pointer_down(300.0, 20.0, 2);
    assert!(core.is_dragging());
    assert_eq!(core.offsets(), &offsets[..]);

    core.pointer_move(140.0, 32.0);
    assert_eq!(core.offsets()[0], offsets[0] + 20.0);

    // A two-finger tap from rest starts nothing.
    let mut idle = SliderCore::new(3, 200.0, 0.0, 0.0, Side::Left);
    idle.set_container_width(1200.0);
    idle.pointer_down(100.0, 0.0, 2);
    assert!(!idle.is_dragging());
}

#[test]
fn pointer_down_cancels_inflight_decay() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 0.0, Side::Left);
    core.set_container_width(1200.0);

    core.pointer_down(100.0, 0.0, 1);
    core.pointer_move(150.0, 16.0);
    core.pointer_up();
    assert!(core.is_decaying());

    core.pointer_down(200.0, 100.0, 1);
    assert!(core.is_dragging());
    assert_eq!(core.decay_velocity(), 0.0);
}

#[test]
fn velocity_estimate_is_smoothed_not_instantaneous() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 0.0, Side::Left);
    core.set_container_width(1200.0);

    core.pointer_down(0.0, 0.0, 1);
    // Steady 1 px/ms, then one wild 10 px/ms outlier.
    core.pointer_move(16.0, 16.0);
    core.pointer_move(32.0, 32.0);
    core.pointer_move(192.0, 48.0);
    core.pointer_up();

    // Raw outlier sample would be 160 px/frame; the EMA keeps it below.
    assert!(core.is_decaying());
    assert!(core.decay_velocity() < 160.0);
    assert!(core.decay_velocity() > 16.0);
}

#[test]
fn resize_resets_offsets_and_recomputes_count() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 1.0, Side::Left);
    core.set_container_width(1200.0);
    assert_eq!(core.count(), 9);

    core.tick();
    core.tick();
    assert_ne!(core.offsets()[0], 0.0);

    core.set_container_width(2400.0);
    assert_eq!(core.count(), 15);
    assert!(core.offsets().iter().all(|&o| o == 0.0));
    assert_eq!(core.offsets().len(), core.count());
}

#[test]
fn speed_and_side_changes_reset_like_a_resize() {
    let mut core = SliderCore::new(3, 200.0, 0.0, 1.0, Side::Left);
    core.set_container_width(1200.0);
    core.tick();
    assert_ne!(core.offsets()[0], 0.0);

    core.set_speed(3.0);
    assert!(core.offsets().iter().all(|&o| o == 0.0));

    core.tick();
    core.set_side(Side::Right);
    assert!(core.offsets().iter().all(|&o| o == 0.0));

    // No-op changes do not reset.
    core.tick();
    core.set_side(Side::Right);
    core.set_speed(3.0);
    assert_ne!(core.offsets()[0], 0.0);
}

#[test]
fn side_parse_rejects_unknown_values() {
    assert_eq!(Side::parse("left"), Ok(Side::Left));
    assert_eq!(Side::parse("right"), Ok(Side::Right));
    assert!(Side::parse("up").is_err());
}
