//! Vitrine Engine - interaction core for the Vitrine portfolio site
//!
//! Two loosely coupled subsystems, each a plain-Rust core behind a thin
//! wasm-bindgen facade:
//! - slider/  - infinite carousel: replication, autoscroll, drag + inertia
//! - grid/    - virtualized 10k-item grid: worker-backed generation,
//!              single-writer store, row windowing
//! - core/    - shared plumbing: hot-path indexing, RNG, clock
//!
//! The JS shell owns rAF loops, event listeners and DOM writes; the engine
//! owns state and math.

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod grid;
pub mod slider;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Vitrine WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use grid::{handle_worker_message, DataGrid, GridCore};
pub use slider::{Slider, SliderCore};
