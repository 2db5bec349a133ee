// Handlers for the launch project RPCs
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::{csv_text, from_grpc_inputs, to_grpc_project, to_grpc_result, to_status};
use crate::services::{
    CreateProjectRequest, DeleteProjectResponse, ExportResponse, ListProjectsResponse,
    ProjectIdRequest, ProjectResponse, ProtoLaunchProject, UpdateProjectInputsRequest,
};
use crate::state::PlannerState;
use planner_engine::data::export::export_projection;
use planner_shared::models::RecordId;

pub async fn handle_create_project(
    req_payload: CreateProjectRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ProtoLaunchProject>, Status> {
    let mut state = state.write().await;
    let created = state
        .projects
        .create(
            &req_payload.name,
            &req_payload.description,
            &req_payload.price_range,
            &req_payload.sub_category,
        )
        .map_err(to_status)?;
    Ok(Response::new(to_grpc_project(created)))
}

pub async fn handle_list_projects(
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ListProjectsResponse>, Status> {
    let state = state.read().await;
    let projects = state.projects.list().iter().map(to_grpc_project).collect();
    Ok(Response::new(ListProjectsResponse { projects }))
}

pub async fn handle_update_project_inputs(
    req_payload: UpdateProjectInputsRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ProtoLaunchProject>, Status> {
    let proto_inputs = req_payload
        .inputs
        .ok_or_else(|| Status::invalid_argument("Projection inputs are required."))?;
    let inputs = from_grpc_inputs(&proto_inputs).map_err(to_status)?;
    let id = RecordId(req_payload.id);

    let mut state = state.write().await;
    state.projects.update_inputs(&id, inputs).map_err(to_status)?;
    let project = state
        .projects
        .get(&id)
        .ok_or_else(|| Status::not_found(format!("Record not found: {}", id)))?;
    tracing::info!(project_id = %id, "Updated project inputs");
    Ok(Response::new(to_grpc_project(project)))
}

pub async fn handle_evaluate_project(
    req_payload: ProjectIdRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ProjectResponse>, Status> {
    let id = RecordId(req_payload.id);
    let result = state.read().await.projects.evaluate(&id).map_err(to_status)?;
    tracing::debug!(project_id = %id, net_margin_pct = result.net_margin_pct, "Project evaluated");
    Ok(Response::new(ProjectResponse {
        result: Some(to_grpc_result(&result)),
    }))
}

pub async fn handle_export_projection(
    req_payload: ProjectIdRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<ExportResponse>, Status> {
    let id = RecordId(req_payload.id);
    let result = state.read().await.projects.evaluate(&id).map_err(to_status)?;
    let mut buffer = Vec::new();
    export_projection(&mut buffer, &result).map_err(to_status)?;
    Ok(Response::new(ExportResponse { csv: csv_text(buffer)? }))
}

pub async fn handle_delete_project(
    req_payload: ProjectIdRequest,
    state: Arc<RwLock<PlannerState>>,
) -> Result<Response<DeleteProjectResponse>, Status> {
    let id = RecordId(req_payload.id);
    let mut state = state.write().await;
    let removed = state.projects.delete(&id).map_err(to_status)?;
    tracing::info!(project_id = %id, name = %removed.name, "Deleted launch project");
    Ok(Response::new(DeleteProjectResponse {
        success: true,
        message: format!("Deleted project '{}'", removed.name),
    }))
}
