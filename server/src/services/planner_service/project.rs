// Handler for the Project RPC
use tonic::{Response, Status};

use super::helpers::{from_grpc_inputs, to_grpc_result, to_status};
use crate::services::{ProjectRequest, ProjectResponse};
use planner_engine::projection::project;

pub async fn handle_project(req_payload: ProjectRequest) -> Result<Response<ProjectResponse>, Status> {
    let proto_inputs = req_payload
        .inputs
        .ok_or_else(|| Status::invalid_argument("Projection inputs are required."))?;
    let inputs = from_grpc_inputs(&proto_inputs).map_err(to_status)?;

    let result = project(&inputs);
    tracing::debug!(
        total_market_volume = result.total_market_volume,
        unit_net_profit = result.unit_net_profit,
        net_margin_pct = result.net_margin_pct,
        "Projection computed"
    );
    Ok(Response::new(ProjectResponse {
        result: Some(to_grpc_result(&result)),
    }))
}
