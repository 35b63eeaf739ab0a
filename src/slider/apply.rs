//! Applies a movement delta to the offset vector through the pure model.
//!
//! This is the single write path for offsets: autoscroll, drag and decay
//! all funnel through here, so the mutual-exclusion rule only has to hold
//! at the call sites in `autoscroll::tick` and the drag handlers.

use super::position::{self, Bounds};
use super::SliderCore;

pub(super) fn apply_delta(core: &mut SliderCore, delta: f32) {
    if core.count == 0 || delta == 0.0 {
        return;
    }

    // Rebuild the scratch bounds from the current layout. Reuses the
    // allocation; pointer-move handlers run unthrottled so this stays O(n)
    // with no churn.
    core.bounds_scratch.clear();
    for i in 0..core.count {
        let off = *fast!(core.offsets, [i]);
        core.bounds_scratch
            .push(position::slide_bounds(i, off, core.slide_width, core.gap));
    }

    let container = Bounds::new(0.0, core.container_width);
    position::advance(
        &mut core.offsets,
        delta,
        &core.bounds_scratch,
        container,
        core.count,
        core.gap,
    );
}
