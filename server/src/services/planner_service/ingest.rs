// Handler for the Ingest RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::{to_grpc_record, to_status};
use crate::services::{IngestRequest, IngestResponse};
use crate::state::PlannerState;
use planner_engine::data::ingest_parser::{validate_month, IngestParser};

pub async fn handle_ingest(
    req_payload: IngestRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<IngestResponse>, Status> {
    validate_month(&req_payload.month).map_err(to_status)?;
    if req_payload.price_range.trim().is_empty() {
        return Err(Status::invalid_argument("A price range must be selected before pasting data."));
    }

    // Hold the write lock across parse and insert so two pastes cannot both accept the same row
    let mut state = state.write().await;
    let category = state.resolve_category(&req_payload.category);
    let parser = IngestParser::new(state.column_split);
    let outcome = parser.ingest(
        &req_payload.raw_text,
        &req_payload.month,
        req_payload.price_range.trim(),
        &category,
        &state.records.prior_records(),
    );
    let ids = state.records.insert_accepted(&outcome);

    let accepted = ids
        .iter()
        .zip(outcome.accepted.iter())
        .map(|(id, record)| to_grpc_record(id, record))
        .collect();
    let message = format!(
        "Imported {} rows, skipped {} duplicates and {} malformed rows",
        outcome.accepted.len(),
        outcome.skipped_duplicates,
        outcome.skipped_malformed
    );

    Ok(Response::new(IngestResponse {
        accepted,
        skipped_duplicates: outcome.skipped_duplicates as u32,
        skipped_malformed: outcome.skipped_malformed as u32,
        message,
    }))
}
