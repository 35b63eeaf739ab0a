//! Pure position model for the infinite slider.
//!
//! The whole engine rests on one trick: a fixed, finite set of slide
//! elements scrolls sideways, and any slide that leaves the container on
//! one edge is relocated by exactly one loop-length so it reappears on the
//! other edge. No slide is ever created or destroyed while scrolling.

/// Horizontal extent of one element, in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
}

impl Bounds {
    pub fn new(left: f32, right: f32) -> Self {
        Bounds { left, right }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Number of replicated slides needed to cover the container plus one
/// slide of slack on each edge: smallest multiple of `base_len` with
/// `count * slide_width >= container_width + 2 * slide_width`.
///
/// Degenerate inputs (`container_width <= 0`, empty base, non-positive
/// slide width) return `base_len` unchanged; the DOM-not-ready case is a
/// zero-size no-op retried on the next layout pass.
pub fn replicated_count(base_len: usize, container_width: f32, slide_width: f32) -> usize {
    if container_width <= 0.0 || base_len == 0 || slide_width <= 0.0 {
        return base_len;
    }
    let needed = (container_width + 2.0 * slide_width) / slide_width;
    let per_copy = base_len as f32;
    let copies = (needed / per_copy).ceil().max(1.0) as usize;
    copies * base_len
}

/// Repeat `base` whole copies at a time until the replicated strip is wide
/// enough to loop seamlessly. Returns `base` unchanged for degenerate input.
pub fn build_replicated_slides<T: Clone>(
    base: &[T],
    container_width: f32,
    slide_width: f32,
) -> Vec<T> {
    let count = replicated_count(base.len(), container_width, slide_width);
    if base.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        out.extend_from_slice(base);
    }
    out
}

/// Fresh offset vector: one zero per rendered slide.
pub fn initial_offsets(count: usize) -> Vec<f32> {
    vec![0.0; count]
}

/// Apply `delta` to every offset and wrap slides that scrolled out.
///
/// `bounds[i]` is slide i's extent BEFORE the delta; `offsets` and `bounds`
/// must have length `slide_count`. Moving left, a slide whose right edge
/// ends up past the container's left edge jumps forward by
/// `slide_count * (width + gap)`; moving right, a slide whose left edge
/// ends up past the container's right edge jumps backward by the same
/// amount. With a single slide the wrap amount degenerates to its own
/// width + gap, which still may not fire twice within one frame's delta
/// (deltas are far below one loop-length).
pub fn advance(
    offsets: &mut [f32],
    delta: f32,
    bounds: &[Bounds],
    container: Bounds,
    slide_count: usize,
    gap: f32,
) {
    debug_assert_eq!(offsets.len(), slide_count);
    debug_assert_eq!(bounds.len(), slide_count);
    if delta == 0.0 {
        return;
    }
    for i in 0..slide_count {
        let b = *fast!(bounds, [i]);
        let wrap = slide_count as f32 * (b.width() + gap);
        let mut off = *fast!(offsets, [i]) + delta;
        if delta < 0.0 {
            if b.right + delta < container.left {
                off += wrap;
            }
        } else if b.left + delta > container.right {
            off -= wrap;
        }
        fast!(offsets, [i] = off);
    }
}

/// Slide i's extent given the uniform layout the slider renders: slides
/// laid out edge to edge at `slide_width + gap` pitch, shifted by the
/// current offset.
#[inline]
pub fn slide_bounds(index: usize, offset: f32, slide_width: f32, gap: f32) -> Bounds {
    let left = index as f32 * (slide_width + gap) + offset;
    Bounds::new(left, left + slide_width)
}
