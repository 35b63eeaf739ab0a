use wasm_bindgen::prelude::*;

use super::{Side, SliderCore};

#[wasm_bindgen]
pub struct Slider {
    core: SliderCore,
}

#[wasm_bindgen]
impl Slider {
    /// Create a slider for `slide_count` caller slides of `slide_width` px.
    /// `side` is "left" or "right"; `speed` of 0 disables autoscroll.
    #[wasm_bindgen(constructor)]
    pub fn new(
        slide_count: u32,
        slide_width: f32,
        gap: f32,
        speed: f32,
        side: &str,
    ) -> Result<Slider, JsValue> {
        let side = Side::parse(side).map_err(|e| JsValue::from_str(&e))?;
        Ok(Slider {
            core: SliderCore::new(slide_count as usize, slide_width, gap, speed, side),
        })
    }

    /// Replicated slide count; the host renders this many elements.
    #[wasm_bindgen(getter, js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.core.count() as u32
    }

    #[wasm_bindgen(js_name = setContainerWidth)]
    pub fn set_container_width(&mut self, width: f32) {
        self.core.set_container_width(width);
    }

    #[wasm_bindgen(js_name = setBaseSlideCount)]
    pub fn set_base_slide_count(&mut self, slide_count: u32) {
        self.core.set_base_len(slide_count as usize);
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, speed: f32) {
        self.core.set_speed(speed);
    }

    #[wasm_bindgen(js_name = setSide)]
    pub fn set_side(&mut self, side: &str) -> Result<(), JsValue> {
        let side = Side::parse(side).map_err(|e| JsValue::from_str(&e))?;
        self.core.set_side(side);
        Ok(())
    }

    /// Intersection-observer input from the host.
    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&mut self, visible: bool) {
        self.core.set_visible(visible);
    }

    /// Mouse-enter pauses autoscroll without starting a drag.
    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self) {
        self.core.set_hovered(true);
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.core.set_hovered(false);
    }

    /// `active_pointers` is the number of live contact points; > 1 is a
    /// multi-touch gesture and is ignored entirely.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, timestamp_ms: f64, active_pointers: u32) {
        self.core.pointer_down(x, timestamp_ms, active_pointers);
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, timestamp_ms: f64) {
        self.core.pointer_move(x, timestamp_ms);
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    /// One rAF tick. Speed is px per tick by contract (frame-rate
    /// dependent, matching the site's observed behavior).
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Whether the host should keep its rAF loop registered. When this
    /// turns false the host cancels the loop; no frames queue while idle.
    #[wasm_bindgen(js_name = wantsFrame)]
    pub fn wants_frame(&self) -> bool {
        self.core.wants_frame()
    }

    /// Pointer to the offset vector (for a Float32Array view over wasm
    /// memory). The host reads it each frame and writes transforms
    /// directly, keeping 60fps DOM writes off the declarative path.
    /// Invalidated by any rebuild; re-read the
    /// pointer after `setContainerWidth`/`setSpeed`/`setSide`/
    /// `setBaseSlideCount`.
    #[wasm_bindgen(js_name = offsetsPtr)]
    pub fn offsets_ptr(&self) -> *const f32 {
        self.core.offsets().as_ptr()
    }

    #[wasm_bindgen(js_name = offsetsLen)]
    pub fn offsets_len(&self) -> usize {
        self.core.offsets().len()
    }

    /// Bounds-checked single-offset read (debug/tooling path).
    pub fn offset(&self, index: usize) -> Option<f32> {
        self.core.offsets().get(index).copied()
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.core.is_dragging()
    }

    #[wasm_bindgen(getter, js_name = isDecaying)]
    pub fn is_decaying(&self) -> bool {
        self.core.is_decaying()
    }
}
