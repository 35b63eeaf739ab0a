//! Infinite slider engine.
//!
//! A fixed strip of replicated slides scrolls horizontally forever. Three
//! controllers can move it (autoscroll, an active drag, the post-release
//! decay) and the state machine guarantees at most one of them writes the
//! offset vector in any given frame.
//!
//! The host (the site's JS shell) owns the rAF loop, pointer listeners and
//! DOM writes; it feeds events in through the facade and reads offsets back
//! out as a `Float32Array` view over wasm memory.

pub mod position;

mod apply;
mod autoscroll;
mod drag;
mod facade;
mod layout;
mod settings;

pub use drag::{ANIMATE_THRESHOLD, FRICTION, STOP_THRESHOLD};
pub use facade::Slider;
pub use position::{advance, build_replicated_slides, initial_offsets, replicated_count, Bounds};

use drag::DragPhase;

/// Autoscroll direction: which edge slides exit through.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(format!("unknown side '{other}' (expected 'left' or 'right')")),
        }
    }
}

/// The slider state: replicated layout, offset vector, autoscroll gate and
/// drag state machine. Plain Rust, fully testable off the wasm boundary.
pub struct SliderCore {
    base_len: usize,
    slide_width: f32,
    gap: f32,
    container_width: f32,

    // Replicated strip; offsets always has length `count`.
    count: usize,
    offsets: Vec<f32>,
    bounds_scratch: Vec<Bounds>,

    // Autoscroll gate
    speed: f32,
    side: Side,
    visible: bool,
    hovered: bool,

    drag: DragPhase,
}

impl SliderCore {
    pub fn new(base_len: usize, slide_width: f32, gap: f32, speed: f32, side: Side) -> Self {
        layout::create_slider_core(base_len, slide_width, gap, speed, side)
    }

    /// Container width from the host's resize observer. Zero width (ref not
    /// attached yet) keeps the base count; the host retries next layout pass.
    pub fn set_container_width(&mut self, width: f32) {
        layout::set_container_width(self, width);
    }

    /// Replace the caller's base slide count. Full reset, like a resize.
    pub fn set_base_len(&mut self, base_len: usize) {
        layout::set_base_len(self, base_len);
    }

    pub fn set_speed(&mut self, speed: f32) {
        settings::set_speed(self, speed);
    }

    pub fn set_side(&mut self, side: Side) {
        settings::set_side(self, side);
    }

    /// Intersection-observer input: off-screen sliders consume zero CPU.
    pub fn set_visible(&mut self, visible: bool) {
        settings::set_visible(self, visible);
    }

    /// Hover pauses autoscroll without starting a drag.
    pub fn set_hovered(&mut self, hovered: bool) {
        settings::set_hovered(self, hovered);
    }

    /// Pointer-down with the number of active contact points; more than one
    /// means a multi-touch gesture, which the slider ignores entirely.
    pub fn pointer_down(&mut self, x: f32, timestamp_ms: f64, active_pointers: u32) {
        drag::pointer_down(self, x, timestamp_ms, active_pointers);
    }

    pub fn pointer_move(&mut self, x: f32, timestamp_ms: f64) {
        drag::pointer_move(self, x, timestamp_ms);
    }

    pub fn pointer_up(&mut self) {
        drag::pointer_up(self);
    }

    /// One animation-frame tick. Applies exactly one of {autoscroll delta,
    /// decay delta} or nothing; during a drag the pointer events drive the
    /// offsets and ticks are no-ops.
    ///
    /// `speed` is px per tick, not px per second: visual speed follows the
    /// host's frame rate by contract (see DESIGN notes).
    pub fn tick(&mut self) {
        autoscroll::tick(self);
    }

    /// Whether the host should keep its frame loop registered. False means
    /// cancel the loop outright; no frames are queued while inactive.
    pub fn wants_frame(&self) -> bool {
        autoscroll::wants_frame(self)
    }

    /// Replicated slide count (a multiple of the base count).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }

    pub fn is_decaying(&self) -> bool {
        matches!(self.drag, DragPhase::Releasing { .. })
    }

    /// Decay velocity, zero outside the Releasing phase. Test hook.
    #[cfg(test)]
    pub(crate) fn decay_velocity(&self) -> f32 {
        match self.drag {
            DragPhase::Releasing { velocity } => velocity,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
