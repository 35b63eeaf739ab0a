//! Shared engine plumbing: hot-path indexing, RNG, and a wasm/native clock.

#[macro_use]
pub mod utils;
pub mod clock;
pub mod random;

pub use clock::MonoTimer;
