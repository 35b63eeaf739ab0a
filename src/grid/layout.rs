//! Width observation → items-per-row.
//!
//! Cells are square (side = row_height - gap) separated by `gap`, so a row
//! of n cells needs `n * (row_height - gap) + (n - 1) * gap + gap` px,
//! hence `n = floor((width - gap) / (row_height - gap))`, clamped to 1.

use super::{store, GridCore, WorkerRequest};

pub fn items_per_row_for_width(width: f32, row_height: f32, gap: f32) -> u32 {
    let pitch = row_height - gap;
    if width <= 0.0 || pitch <= 0.0 {
        return 1;
    }
    (((width - gap) / pitch).floor() as i64).max(1) as u32
}

pub(super) fn observe_width(core: &mut GridCore, width: f32) -> Option<WorkerRequest> {
    // Container ref not attached yet: zero-size no-op, the host retries on
    // the next layout pass.
    if width <= 0.0 {
        return None;
    }
    let items_per_row = items_per_row_for_width(width, core.row_height, core.gap);
    // Push only on change; store::set_items_per_row also drops repeats so
    // sub-pixel jitter can never trigger a regeneration.
    store::set_items_per_row(core, items_per_row)
}
