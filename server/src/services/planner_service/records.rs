// Handlers for the record and sub-category RPCs
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::{
    csv_text, optional_filter, to_grpc_record, to_grpc_sub_category, to_grpc_summary, to_status,
};
use crate::services::{
    AddSubCategoryRequest, DeleteRecordRequest, DeleteRecordResponse, ExportResponse,
    ListRecordsResponse, ListSubCategoriesResponse, ProtoSubCategory, RecordFilter,
    RemoveSubCategoryRequest, RemoveSubCategoryResponse, SummarizeResponse,
    UpdateSubCategoryRequest,
};
use crate::state::PlannerState;
use planner_engine::data::export::export_records;
use planner_engine::data::summary::summarize;
use planner_shared::models::RecordId;

pub async fn handle_list_records(
    filter: RecordFilter,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ListRecordsResponse>, Status> {
    let month = optional_filter(&filter.month);
    let price_range = optional_filter(&filter.price_range);

    let state = state.read().await;
    let records = state
        .records
        .filtered(month, price_range)
        .map(|(id, r)| to_grpc_record(id, r))
        .collect();
    Ok(Response::new(ListRecordsResponse { records }))
}

pub async fn handle_delete_record(
    req_payload: DeleteRecordRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<DeleteRecordResponse>, Status> {
    let id = RecordId(req_payload.id);
    let mut state = state.write().await;
    let removed = state.records.remove(&id).map_err(to_status)?;
    tracing::info!(record_id = %id, title = %removed.title, "Deleted sales record");
    Ok(Response::new(DeleteRecordResponse {
        success: true,
        message: format!("Deleted '{}' ({} / {})", removed.title, removed.month, removed.price_range),
    }))
}

pub async fn handle_summarize(
    filter: RecordFilter,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<SummarizeResponse>, Status> {
    let state = state.read().await;
    let records = state
        .records
        .records_for(optional_filter(&filter.month), optional_filter(&filter.price_range));
    Ok(Response::new(to_grpc_summary(&summarize(&records))))
}

pub async fn handle_export_records(
    filter: RecordFilter,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ExportResponse>, Status> {
    let records = {
        let state = state.read().await;
        state
            .records
            .records_for(optional_filter(&filter.month), optional_filter(&filter.price_range))
    };
    let mut buffer = Vec::new();
    export_records(&mut buffer, &records).map_err(to_status)?;
    tracing::info!(rows = records.len(), "Exported sales records");
    Ok(Response::new(ExportResponse { csv: csv_text(buffer)? }))
}

pub async fn handle_add_sub_category(
    req_payload: AddSubCategoryRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ProtoSubCategory>, Status> {
    let mut state = state.write().await;
    let added = state
        .catalog
        .add(&req_payload.name, &req_payload.description)
        .map_err(to_status)?;
    tracing::info!(id = added.id, name = %added.name, "Added sub-category");
    Ok(Response::new(to_grpc_sub_category(added)))
}

pub async fn handle_list_sub_categories(
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ListSubCategoriesResponse>, Status> {
    let state = state.read().await;
    let sub_categories = state.catalog.list().iter().map(to_grpc_sub_category).collect();
    Ok(Response::new(ListSubCategoriesResponse { sub_categories }))
}

pub async fn handle_update_sub_category(
    req_payload: UpdateSubCategoryRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ProtoSubCategory>, Status> {
    let mut state = state.write().await;
    state
        .catalog
        .update(req_payload.id, &req_payload.name, &req_payload.description)
        .map_err(to_status)?;
    let id = req_payload.id;
    let updated = state
        .catalog
        .get(id)
        .ok_or_else(|| Status::not_found(format!("Sub-category {} does not exist", id)))?;
    tracing::info!(id = updated.id, name = %updated.name, "Updated sub-category");
    Ok(Response::new(to_grpc_sub_category(updated)))
}

// Records already stamped with the removed name keep it.
pub async fn handle_remove_sub_category(
    req_payload: RemoveSubCategoryRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<RemoveSubCategoryResponse>, Status> {
    let mut state = state.write().await;
    let removed = state.catalog.remove(req_payload.id).map_err(to_status)?;
    tracing::info!(id = removed.id, name = %removed.name, "Removed sub-category");
    Ok(Response::new(RemoveSubCategoryResponse {
        success: true,
        message: format!("Removed sub-category '{}'", removed.name),
    }))
}
