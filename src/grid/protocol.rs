//! Worker message protocol.
//!
//! Request `{type: "INIT", payload: {itemsPerRow, totalItems}}` →
//! response `{type: "INIT_COMPLETE", payload: {entities, rows,
//! itemsPerRow}}`. The `itemsPerRow` echo doubles as the staleness tag:
//! requests are only issued when the value changes, so no two in-flight
//! requests ever share a tag.
//!
//! Ids are dense `[0, totalItems)`, so `entities` travels as a JSON array
//! indexed by id; to an indexing consumer that is the integer-id map the
//! contract describes.

use serde::{Deserialize, Serialize};

use super::generate::{self, Generated};
use super::store::Entity;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum WorkerRequest {
    #[serde(rename = "INIT")]
    Init {
        #[serde(rename = "itemsPerRow")]
        items_per_row: i32,
        #[serde(rename = "totalItems")]
        total_items: u32,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum WorkerResponse {
    #[serde(rename = "INIT_COMPLETE")]
    InitComplete {
        entities: Vec<Entity>,
        rows: Vec<Vec<u32>>,
        #[serde(rename = "itemsPerRow")]
        items_per_row: i32,
    },
}

pub(super) fn init_request(items_per_row: u32, total_items: u32) -> WorkerRequest {
    WorkerRequest::Init {
        items_per_row: items_per_row as i32,
        total_items,
    }
}

pub(super) fn complete_response(generated: Generated) -> WorkerResponse {
    WorkerResponse::InitComplete {
        entities: generated.entities,
        rows: generated.rows,
        items_per_row: generated.items_per_row,
    }
}

/// Worker-side dispatch: run the generation a request asks for.
pub fn handle_request(request: WorkerRequest, seed: u32) -> WorkerResponse {
    match request {
        WorkerRequest::Init {
            items_per_row,
            total_items,
        } => complete_response(generate::generate(items_per_row, total_items, seed)),
    }
}

/// JSON-in, JSON-out worker entry. Malformed JSON is the only error path;
/// malformed *parameters* (e.g. itemsPerRow <= 0) still produce a
/// well-formed empty response.
pub fn handle_message(json: &str, seed: u32) -> Result<String, String> {
    let request: WorkerRequest = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let response = handle_request(request, seed);
    serde_json::to_string(&response).map_err(|e| e.to_string())
}
