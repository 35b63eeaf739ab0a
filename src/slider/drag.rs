//! Pointer state machine: Idle → Dragging → Releasing(decay) → Idle.
//!
//! Velocity is an exponential-moving estimate of Δx/Δt rather than the
//! last raw sample; pointer events arrive with irregular timing and a raw
//! sample makes the flick strength jittery.

use super::{apply, SliderCore};

/// Per-frame velocity retention during decay. < 1, so decay terminates.
pub const FRICTION: f32 = 0.95;

/// Converts the px/ms pointer velocity into px-per-frame flick strength
/// (one frame at 60 Hz is ~16 ms).
pub(super) const VELOCITY_MULTIPLIER: f32 = 16.0;

/// EMA weight of the newest Δx/Δt sample.
pub(super) const VELOCITY_SMOOTHING: f32 = 0.8;

/// Minimum release velocity (px/frame) that starts a decay animation.
pub const ANIMATE_THRESHOLD: f32 = 0.5;

/// Decay velocity (px/frame) at or below which the slider comes to rest.
pub const STOP_THRESHOLD: f32 = 0.1;

#[derive(Clone, Copy, Debug)]
pub(super) enum DragPhase {
    Idle,
    Dragging {
        last_x: f32,
        last_t: f64,
        velocity: f32,
    },
    Releasing {
        velocity: f32,
    },
}

pub(super) fn pointer_down(core: &mut SliderCore, x: f32, t: f64, active_pointers: u32) {
    // No multi-touch gestures: extra contact points are ignored and the
    // first pointer keeps driving the drag.
    if active_pointers > 1 {
        return;
    }
    // Starting a drag also cancels any in-flight decay; autoscroll is
    // gated off for as long as we are not Idle.
    core.drag = DragPhase::Dragging {
        last_x: x,
        last_t: t,
        velocity: 0.0,
    };
}

pub(super) fn pointer_move(core: &mut SliderCore, x: f32, t: f64) {
    let DragPhase::Dragging {
        last_x,
        last_t,
        velocity,
    } = core.drag
    else {
        return;
    };

    let delta = x - last_x;
    let dt = (t - last_t) as f32;
    let velocity = if dt > 0.0 {
        let sample = delta / dt * VELOCITY_MULTIPLIER;
        velocity * (1.0 - VELOCITY_SMOOTHING) + sample * VELOCITY_SMOOTHING
    } else {
        // Duplicate timestamp (coalesced events): keep the previous estimate.
        velocity
    };

    apply::apply_delta(core, delta);
    core.drag = DragPhase::Dragging {
        last_x: x,
        last_t: t,
        velocity,
    };
}

pub(super) fn pointer_up(core: &mut SliderCore) {
    if let DragPhase::Dragging { velocity, .. } = core.drag {
        core.drag = if velocity.abs() > ANIMATE_THRESHOLD {
            DragPhase::Releasing { velocity }
        } else {
            DragPhase::Idle
        };
    }
}

/// One decay frame: shrink the velocity, stop at the threshold, otherwise
/// apply it as this frame's delta.
pub(super) fn decay_tick(core: &mut SliderCore) {
    let DragPhase::Releasing { velocity } = core.drag else {
        return;
    };
    let velocity = velocity * FRICTION;
    if velocity.abs() <= STOP_THRESHOLD {
        core.drag = DragPhase::Idle;
        return;
    }
    apply::apply_delta(core, velocity);
    core.drag = DragPhase::Releasing { velocity };
}
