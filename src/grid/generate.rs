//! Stateless entity generation.
//!
//! Every request regenerates from scratch, never patching an existing
//! batch, which keeps the id→row mapping trivially correct when the grid
//! width changes. Values come from a per-id mix of the seed, so the serial
//! and rayon paths produce identical batches.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::store::Entity;
use crate::core::random::mix32;

/// One complete generation batch. `rows[i]` holds the ids rendered in row
/// i, contiguous in id order; every row has exactly `items_per_row` ids
/// except possibly the last.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub entities: Vec<Entity>,
    pub rows: Vec<Vec<u32>>,
    pub items_per_row: i32,
}

/// Generate `total_items` entities partitioned into rows of
/// `items_per_row`. A non-positive `items_per_row` is an input-shape error
/// handled by returning empty collections, never by panicking.
pub fn generate(items_per_row: i32, total_items: u32, seed: u32) -> Generated {
    if items_per_row <= 0 {
        return Generated {
            entities: Vec::new(),
            rows: Vec::new(),
            items_per_row,
        };
    }

    #[cfg(feature = "parallel")]
    let entities: Vec<Entity> = (0..total_items)
        .into_par_iter()
        .map(|id| Entity {
            value: (mix32(seed, id) & 1) as u8,
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let entities: Vec<Entity> = (0..total_items)
        .map(|id| Entity {
            value: (mix32(seed, id) & 1) as u8,
        })
        .collect();

    let width = items_per_row as u32;
    let mut rows = Vec::with_capacity(total_items.div_ceil(width) as usize);
    let mut id = 0u32;
    while id < total_items {
        let end = (id + width).min(total_items);
        rows.push((id..end).collect());
        id = end;
    }

    Generated {
        entities,
        rows,
        items_per_row,
    }
}
