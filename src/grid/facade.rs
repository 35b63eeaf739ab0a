use wasm_bindgen::prelude::*;

use super::{protocol, GenStats, GridCore, WorkerResponse};
use crate::core::clock;

/// Worker-side entry point: the host's worker script feeds each incoming
/// message through this and posts the returned JSON back. The worker is a
/// long-lived singleton; nothing here holds state between calls.
#[wasm_bindgen(js_name = handleWorkerMessage)]
pub fn handle_worker_message(message: &str) -> Result<String, JsValue> {
    let seed = clock::now_ms() as u32;
    protocol::handle_message(message, seed).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub struct DataGrid {
    core: GridCore,
}

#[wasm_bindgen]
impl DataGrid {
    /// `row_height` and `gap` in px; cells are square with side
    /// `row_height - gap`.
    #[wasm_bindgen(constructor)]
    pub fn new(total_items: u32, row_height: f32, gap: f32) -> DataGrid {
        DataGrid {
            core: GridCore::new(total_items, row_height, gap),
        }
    }

    /// Feed a container-width observation. When the derived items-per-row
    /// changes this returns the request JSON to post to the worker;
    /// otherwise `None`.
    #[wasm_bindgen(js_name = observeWidth)]
    pub fn observe_width(&mut self, width: f32) -> Result<Option<String>, JsValue> {
        match self.core.observe_width(width) {
            Some(request) => serde_json::to_string(&request)
                .map(Some)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(None),
        }
    }

    /// Explicit items-per-row override (debug/testing surface).
    #[wasm_bindgen(js_name = setItemsPerRow)]
    pub fn set_items_per_row(&mut self, items_per_row: u32) -> Result<Option<String>, JsValue> {
        match self.core.set_items_per_row(items_per_row) {
            Some(request) => serde_json::to_string(&request)
                .map(Some)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(None),
        }
    }

    /// Apply a worker reply. Returns false when the reply was stale and
    /// dropped; that is normal supersession, not an error.
    #[wasm_bindgen(js_name = applyWorkerResponse)]
    pub fn apply_worker_response(&mut self, json: &str) -> Result<bool, JsValue> {
        let response: WorkerResponse =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.core.apply_response(response))
    }

    /// Fallback when worker construction failed: generate on the main
    /// thread. Logged, not fatal; output is identical to the worker path.
    #[wasm_bindgen(js_name = generateSync)]
    pub fn generate_sync(&mut self) -> bool {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(
            &"vitrine-engine: worker unavailable, generating on the main thread".into(),
        );
        self.core.generate_pending_sync()
    }

    #[wasm_bindgen(js_name = toggleValue)]
    pub fn toggle_value(&mut self, id: u32) -> bool {
        self.core.toggle_value(id)
    }

    #[wasm_bindgen(js_name = entityValue)]
    pub fn entity_value(&self, id: u32) -> Option<u8> {
        self.core.entity_value(id)
    }

    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> u32 {
        self.core.row_count() as u32
    }

    #[wasm_bindgen(getter, js_name = itemsPerRow)]
    pub fn items_per_row(&self) -> u32 {
        self.core.items_per_row()
    }

    /// True until the first generation lands and whenever one is in
    /// flight. The host shows a loading state, never a broken layout.
    #[wasm_bindgen(getter, js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.core.is_loading()
    }

    /// Ids rendered in one row, empty for an out-of-range index.
    #[wasm_bindgen(js_name = rowItemIds)]
    pub fn row_item_ids(&self, row_index: u32) -> Vec<u32> {
        self.core
            .row_item_ids(row_index as usize)
            .map(|ids| ids.to_vec())
            .unwrap_or_default()
    }

    // === WINDOWING ===

    #[wasm_bindgen(js_name = setViewportHeight)]
    pub fn set_viewport_height(&mut self, height: f32) {
        self.core.virtualizer_mut().set_viewport_height(height);
    }

    #[wasm_bindgen(js_name = setScrollOffset)]
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.core.virtualizer_mut().set_scroll_offset(offset);
    }

    #[wasm_bindgen(js_name = setOverscan)]
    pub fn set_overscan(&mut self, overscan: u32) {
        self.core.virtualizer_mut().set_overscan(overscan as usize);
    }

    /// Recompute the row window after scroll/resize/data changes.
    #[wasm_bindgen(js_name = updateWindow)]
    pub fn update_window(&mut self) {
        self.core.virtualizer_mut().update();
    }

    #[wasm_bindgen(getter, js_name = totalHeight)]
    pub fn total_height(&self) -> f32 {
        self.core.virtualizer().total_height()
    }

    #[wasm_bindgen(getter, js_name = windowLen)]
    pub fn window_len(&self) -> u32 {
        self.core.virtualizer().slots().len() as u32
    }

    /// Row index per slot, in slot order (slots are recycled; order is
    /// stable while a row stays in the window).
    #[wasm_bindgen(js_name = windowIndices)]
    pub fn window_indices(&self) -> Vec<u32> {
        self.core
            .virtualizer()
            .slots()
            .iter()
            .map(|s| s.index as u32)
            .collect()
    }

    /// Absolute top offset per slot (`index * rowHeight`).
    #[wasm_bindgen(js_name = windowTops)]
    pub fn window_tops(&self) -> Vec<f32> {
        self.core.virtualizer().slots().iter().map(|s| s.top).collect()
    }

    /// 1 where the slot must re-render, 0 where the identity skip applies.
    #[wasm_bindgen(js_name = windowChanged)]
    pub fn window_changed(&self) -> Vec<u8> {
        self.core
            .virtualizer()
            .slots()
            .iter()
            .map(|s| u8::from(s.changed))
            .collect()
    }

    #[wasm_bindgen(js_name = genStats)]
    pub fn gen_stats(&self) -> GenStats {
        self.core.stats()
    }
}
