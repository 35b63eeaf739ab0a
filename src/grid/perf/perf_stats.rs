use wasm_bindgen::prelude::*;

/// Last-generation snapshot for the site's debug overlay.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct GenStats {
    pub(super) generate_ms: f64,
    pub(super) total_items: u32,
    pub(super) rows: u32,
    pub(super) applied: u32,
    pub(super) dropped: u32,
}

#[wasm_bindgen]
impl GenStats {
    /// Duration of the last in-process generation (0 when the worker did
    /// the work; its timing stays worker-side).
    #[wasm_bindgen(getter)]
    pub fn generate_ms(&self) -> f64 {
        self.generate_ms
    }

    #[wasm_bindgen(getter)]
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Generation replies applied since construction.
    #[wasm_bindgen(getter)]
    pub fn applied(&self) -> u32 {
        self.applied
    }

    /// Stale replies dropped by the staleness check. Not an error count.
    #[wasm_bindgen(getter)]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
