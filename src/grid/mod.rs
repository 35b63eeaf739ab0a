//! Virtualized data grid: worker-backed generation, a single-writer entity
//! store, and row windowing over a fixed row height.
//!
//! The host instantiates this same WASM module inside a Web Worker and
//! forwards JSON messages (`protocol`); the main-thread store only applies
//! a reply whose `itemsPerRow` echo matches the newest request, so a slow
//! superseded generation can never clobber a fresh one.

mod facade;
mod generate;
mod layout;
mod protocol;
mod store;
mod virtualizer;

#[path = "perf/perf_stats.rs"]
mod perf_stats;

pub use facade::{handle_worker_message, DataGrid};
pub use generate::{generate, Generated};
pub use layout::items_per_row_for_width;
pub use perf_stats::GenStats;
pub use protocol::{WorkerRequest, WorkerResponse};
pub use store::Entity;
pub use virtualizer::{visible_range, RowSlot, RowVirtualizer};

/// All grid state: config, the entities/rows pair, the in-flight request
/// tag, and the row window. Plain Rust, fully testable off the wasm
/// boundary.
pub struct GridCore {
    total_items: u32,
    row_height: f32,
    gap: f32,
    seed: u32,

    // Swapped together, never separately.
    entities: Vec<Entity>,
    rows: Vec<Vec<u32>>,

    items_per_row: u32,
    pending: Option<u32>,
    rows_generation: u64,

    virtualizer: RowVirtualizer,
    stats: GenStats,
}

impl GridCore {
    pub fn new(total_items: u32, row_height: f32, gap: f32) -> Self {
        GridCore {
            total_items,
            row_height,
            gap: gap.max(0.0),
            seed: crate::core::clock::now_ms() as u32,
            entities: Vec::new(),
            rows: Vec::new(),
            items_per_row: 0,
            pending: None,
            rows_generation: 0,
            virtualizer: RowVirtualizer::new(row_height),
            stats: GenStats::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_seed(total_items: u32, row_height: f32, gap: f32, seed: u32) -> Self {
        let mut core = Self::new(total_items, row_height, gap);
        core.seed = seed;
        core
    }

    /// Request a regeneration for a new grid width. Returns the request the
    /// host should post to its worker, or `None` when nothing changed.
    pub fn set_items_per_row(&mut self, items_per_row: u32) -> Option<WorkerRequest> {
        store::set_items_per_row(self, items_per_row)
    }

    /// Width observation: derive items-per-row and push it only when it
    /// differs (sub-pixel resize jitter must not regenerate 10k entities).
    pub fn observe_width(&mut self, width: f32) -> Option<WorkerRequest> {
        layout::observe_width(self, width)
    }

    /// Apply a generation reply. Returns false (and changes nothing) when
    /// the reply is stale (superseded by a newer request).
    pub fn apply_response(&mut self, response: WorkerResponse) -> bool {
        store::apply_response(self, response)
    }

    /// Synchronous fallback for hosts without worker support: run the
    /// pending generation in-process. Output is identical to the worker's.
    pub fn generate_pending_sync(&mut self) -> bool {
        store::generate_pending_sync(self)
    }

    /// Flip a cell's value. Unknown ids are a no-op.
    pub fn toggle_value(&mut self, id: u32) -> bool {
        store::toggle_value(self, id)
    }

    pub fn entity_value(&self, id: u32) -> Option<u8> {
        store::entity_value(self, id)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_item_ids(&self, row_index: usize) -> Option<&[u32]> {
        store::row_item_ids(self, row_index)
    }

    /// Applied items-per-row (0 until the first generation lands).
    pub fn items_per_row(&self) -> u32 {
        self.items_per_row
    }

    /// "No rows yet" is a valid, display-worthy state: the host renders a
    /// loading card while this is true, never a broken layout.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some() || self.rows_generation == 0
    }

    pub fn virtualizer(&self) -> &RowVirtualizer {
        &self.virtualizer
    }

    pub fn virtualizer_mut(&mut self) -> &mut RowVirtualizer {
        &mut self.virtualizer
    }

    pub fn stats(&self) -> GenStats {
        self.stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
