//! Single-writer entity store.
//!
//! Entities are owned exclusively by the store and mutated only through
//! `toggle_value`; the entities/rows pair is replaced in one swap so a
//! reader can never observe half of an update.

use serde::{Deserialize, Serialize};

use super::{generate, protocol, GridCore, WorkerRequest, WorkerResponse};
use crate::core::MonoTimer;

/// One cell's record. `value` is 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub value: u8,
}

pub(super) fn set_items_per_row(core: &mut GridCore, items_per_row: u32) -> Option<WorkerRequest> {
    // Equal to the applied value: nothing to do.
    if items_per_row == core.items_per_row && core.rows_generation > 0 {
        return None;
    }
    // Already in flight for the same width: don't issue a duplicate.
    if core.pending == Some(items_per_row) {
        return None;
    }
    // Supersede any earlier in-flight request; its reply will fail the
    // staleness check below and be dropped.
    core.pending = Some(items_per_row);
    Some(protocol::init_request(items_per_row, core.total_items))
}

pub(super) fn apply_response(core: &mut GridCore, response: WorkerResponse) -> bool {
    let WorkerResponse::InitComplete {
        entities,
        rows,
        items_per_row,
    } = response;

    // Staleness check: only the reply matching the newest request lands.
    let matches = core
        .pending
        .is_some_and(|tag| i64::from(tag) == i64::from(items_per_row));
    if !matches {
        core.stats.dropped += 1;
        return false;
    }

    // The pair swaps together; readers never see a torn update.
    core.entities = entities;
    core.rows = rows;
    core.items_per_row = core.pending.take().unwrap_or(0);
    core.rows_generation += 1;

    core.stats.applied += 1;
    core.stats.total_items = core.entities.len() as u32;
    core.stats.rows = core.rows.len() as u32;

    let generation = core.rows_generation;
    let row_count = core.rows.len();
    core.virtualizer.set_rows(row_count, generation);
    true
}

/// In-process fallback when the embedding has no worker support. Produces
/// the exact output shape the worker would and feeds it through the same
/// staleness-checked apply path.
pub(super) fn generate_pending_sync(core: &mut GridCore) -> bool {
    let Some(tag) = core.pending else {
        return false;
    };
    let timer = MonoTimer::start();
    let generated = generate::generate(tag as i32, core.total_items, core.seed);
    core.stats.generate_ms = timer.elapsed_ms();
    apply_response(core, protocol::complete_response(generated))
}

pub(super) fn toggle_value(core: &mut GridCore, id: u32) -> bool {
    match core.entities.get_mut(id as usize) {
        Some(entity) => {
            entity.value ^= 1;
            true
        }
        None => false,
    }
}

pub(super) fn entity_value(core: &GridCore, id: u32) -> Option<u8> {
    core.entities.get(id as usize).map(|e| e.value)
}

pub(super) fn row_item_ids(core: &GridCore, row_index: usize) -> Option<&[u32]> {
    core.rows.get(row_index).map(|row| row.as_slice())
}
