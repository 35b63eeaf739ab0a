//! Construction and wholesale rebuilds of the replicated strip.
//!
//! Any change to container width, base slide count, speed or side resets
//! the strip completely: replicated count recomputed, offsets zeroed,
//! drag state discarded. A reset is cheaper to reason about than an
//! interpolated transition over stale wrap state.

use super::drag::DragPhase;
use super::{position, Side, SliderCore};

pub(super) fn create_slider_core(
    base_len: usize,
    slide_width: f32,
    gap: f32,
    speed: f32,
    side: Side,
) -> SliderCore {
    let mut core = SliderCore {
        base_len,
        slide_width,
        gap: gap.max(0.0),
        container_width: 0.0,
        count: 0,
        offsets: Vec::new(),
        bounds_scratch: Vec::new(),
        speed: speed.max(0.0),
        side,
        visible: true,
        hovered: false,
        drag: DragPhase::Idle,
    };
    rebuild(&mut core);
    core
}

pub(super) fn set_container_width(core: &mut SliderCore, width: f32) {
    core.container_width = width.max(0.0);
    rebuild(core);
}

pub(super) fn set_base_len(core: &mut SliderCore, base_len: usize) {
    core.base_len = base_len;
    rebuild(core);
}

pub(super) fn rebuild(core: &mut SliderCore) {
    core.count = position::replicated_count(core.base_len, core.container_width, core.slide_width);
    core.offsets = position::initial_offsets(core.count);
    core.bounds_scratch = Vec::with_capacity(core.count);
    core.drag = DragPhase::Idle;
}
