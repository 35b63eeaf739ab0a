//! Per-frame dispatch: autoscroll xor decay, never both, never during drag.

use super::drag::{self, DragPhase};
use super::{apply, Side, SliderCore};

pub(super) fn tick(core: &mut SliderCore) {
    match core.drag {
        // Pointer-move events drive the offsets while dragging.
        DragPhase::Dragging { .. } => {}
        DragPhase::Releasing { .. } => drag::decay_tick(core),
        DragPhase::Idle => {
            if autoscroll_active(core) {
                let delta = match core.side {
                    Side::Left => -core.speed,
                    Side::Right => core.speed,
                };
                apply::apply_delta(core, delta);
            }
        }
    }
}

/// The autoscroll gate: visible, not hovered, and a positive speed.
/// `speed == 0` disables autoscroll entirely (the strip stays draggable).
pub(super) fn autoscroll_active(core: &SliderCore) -> bool {
    core.visible && !core.hovered && core.speed > 0.0 && core.count > 0
}

/// False tells the host to cancel its frame loop, not merely skip ticks.
/// During a drag no frames are needed; they restart on release or when the
/// gate conditions flip back on.
pub(super) fn wants_frame(core: &SliderCore) -> bool {
    match core.drag {
        DragPhase::Releasing { .. } => true,
        DragPhase::Dragging { .. } => false,
        DragPhase::Idle => autoscroll_active(core),
    }
}
