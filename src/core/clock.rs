//! Wall-clock access that works both in the browser and in native tests.

#[cfg(target_arch = "wasm32")]
use js_sys;

/// Milliseconds since an arbitrary epoch. Used for perf stats and for
/// seeding the generator RNG; never compared across wasm/native builds.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[derive(Clone, Copy)]
pub struct MonoTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl MonoTimer {
    pub fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            MonoTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            MonoTimer { start: std::time::Instant::now() }
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}
