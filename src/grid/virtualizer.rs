//! Row windowing over a fixed row height.
//!
//! Only rows inside the overscanned window are rendered; each gets an
//! absolute top of `index * row_height`. Slots are recycled by
//! `index % window_len` so a row keeps its slot (and the host keeps its
//! component instance) while it stays in the window; when the window
//! shifts by one, one slot changes instead of all of them.

/// Overscan rows beyond each edge of the viewport.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Half-open row range `[start, end)` covering the viewport plus overscan,
/// clamped to `[0, row_count)`.
pub fn visible_range(
    row_count: usize,
    row_height: f32,
    viewport_height: f32,
    scroll_offset: f32,
    overscan: usize,
) -> (usize, usize) {
    if row_count == 0 || row_height <= 0.0 || viewport_height <= 0.0 {
        return (0, 0);
    }
    let scroll = scroll_offset.max(0.0);
    let first = (scroll / row_height).floor() as usize;
    let last = ((scroll + viewport_height) / row_height).ceil() as usize;
    let start = first.saturating_sub(overscan).min(row_count);
    let end = (last + overscan).min(row_count);
    (start.min(end), end)
}

/// One recycled row slot. `changed` is the identity-based skip: false
/// means the slot shows the same row index, over the same rows array, at
/// the same geometry as last update, so the host skips re-rendering it.
#[derive(Clone, Copy, Debug)]
pub struct RowSlot {
    pub index: usize,
    pub top: f32,
    pub changed: bool,
    last_rows_generation: u64,
    last_geometry_generation: u64,
}

pub struct RowVirtualizer {
    row_count: usize,
    row_height: f32,
    viewport_height: f32,
    scroll_offset: f32,
    overscan: usize,

    // Identity counters backing the re-render skip. Rows bump on every
    // store swap; geometry bumps on row-height/viewport changes.
    rows_generation: u64,
    geometry_generation: u64,

    slots: Vec<RowSlot>,
    window_start: usize,
}

impl RowVirtualizer {
    pub fn new(row_height: f32) -> Self {
        RowVirtualizer {
            row_count: 0,
            row_height,
            viewport_height: 0.0,
            scroll_offset: 0.0,
            overscan: DEFAULT_OVERSCAN,
            rows_generation: 0,
            geometry_generation: 0,
            slots: Vec::new(),
            window_start: 0,
        }
    }

    /// New rows array from the store: row count plus its identity tag.
    pub fn set_rows(&mut self, row_count: usize, rows_generation: u64) {
        self.row_count = row_count;
        self.rows_generation = rows_generation;
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        if height != self.viewport_height {
            self.viewport_height = height.max(0.0);
            self.geometry_generation += 1;
        }
    }

    pub fn set_row_height(&mut self, height: f32) {
        if height != self.row_height {
            self.row_height = height;
            self.geometry_generation += 1;
        }
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Total scrollable height the host gives the spacer element.
    pub fn total_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    /// Recompute the window. Slots are recycled in place; each slot's
    /// `changed` flag tells the host whether that row must re-render.
    pub fn update(&mut self) {
        let (start, end) = visible_range(
            self.row_count,
            self.row_height,
            self.viewport_height,
            self.scroll_offset,
            self.overscan,
        );
        let len = end - start;
        self.window_start = start;

        if len != self.slots.len() {
            // Window size changed (resize, data swap): rebuild outright,
            // keyed by `index % len` exactly like the steady-state path.
            self.slots.clear();
            if len == 0 {
                return;
            }
            self.slots.resize(
                len,
                RowSlot {
                    index: 0,
                    top: 0.0,
                    changed: true,
                    last_rows_generation: self.rows_generation,
                    last_geometry_generation: self.geometry_generation,
                },
            );
            for index in start..end {
                self.slots[index % len] = RowSlot {
                    index,
                    top: index as f32 * self.row_height,
                    changed: true,
                    last_rows_generation: self.rows_generation,
                    last_geometry_generation: self.geometry_generation,
                };
            }
            return;
        }

        for index in start..end {
            let slot = &mut self.slots[index % len];
            let changed = slot.index != index
                || slot.last_rows_generation != self.rows_generation
                || slot.last_geometry_generation != self.geometry_generation;
            slot.index = index;
            slot.top = index as f32 * self.row_height;
            slot.changed = changed;
            slot.last_rows_generation = self.rows_generation;
            slot.last_geometry_generation = self.geometry_generation;
        }
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    pub fn slots(&self) -> &[RowSlot] {
        &self.slots
    }
}
