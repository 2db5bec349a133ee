// Main module hub for the planner service: the service struct, its trait impl,
// and the per-RPC handler modules.
use super::{
    AddSubCategoryRequest, CreateProjectRequest, DeleteProjectResponse, DeleteRecordRequest,
    DeleteRecordResponse, ExportResponse, IngestRequest, IngestResponse, ListProjectsRequest,
    ListProjectsResponse, ListRecordsResponse, ListSubCategoriesRequest,
    ListSubCategoriesResponse, PlannerService, ProjectIdRequest, ProjectRequest, ProjectResponse,
    ProtoLaunchProject, ProtoSubCategory, RecordFilter, RemoveSubCategoryRequest,
    RemoveSubCategoryResponse, SummarizeResponse, UpdateProjectInputsRequest,
    UpdateSubCategoryRequest,
};
use crate::state::PlannerState;
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Request, Response, Status};

pub mod helpers;
pub mod ingest;
pub mod project;
pub mod projects;
pub mod records;

pub struct MyPlannerService {
    state: Arc<RwLock<PlannerState>>,
}

impl MyPlannerService {
    pub fn new(state: Arc<RwLock<PlannerState>>) -> Self {
        MyPlannerService { state }
    }
}

#[tonic::async_trait]
impl PlannerService for MyPlannerService {
    async fn ingest(&self, request: Request<IngestRequest>) -> Result<Response<IngestResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            month = %req_payload.month,
            price_range = %req_payload.price_range,
            bytes = req_payload.raw_text.len(),
            "Received IngestRequest"
        );
        ingest::handle_ingest(req_payload, self.state.clone()).await
    }

    async fn list_records(&self, request: Request<RecordFilter>) -> Result<Response<ListRecordsResponse>, Status> {
        let filter = request.into_inner();
        tracing::info!(month = %filter.month, price_range = %filter.price_range, "Received ListRecordsRequest");
        records::handle_list_records(filter, self.state.clone()).await
    }

    async fn delete_record(&self, request: Request<DeleteRecordRequest>) -> Result<Response<DeleteRecordResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(record_id = %req_payload.id, "Received DeleteRecordRequest");
        records::handle_delete_record(req_payload, self.state.clone()).await
    }

    async fn summarize(&self, request: Request<RecordFilter>) -> Result<Response<SummarizeResponse>, Status> {
        let filter = request.into_inner();
        tracing::info!(month = %filter.month, price_range = %filter.price_range, "Received SummarizeRequest");
        records::handle_summarize(filter, self.state.clone()).await
    }

    async fn add_sub_category(&self, request: Request<AddSubCategoryRequest>) -> Result<Response<ProtoSubCategory>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(name = %req_payload.name, "Received AddSubCategoryRequest");
        records::handle_add_sub_category(req_payload, self.state.clone()).await
    }

    async fn list_sub_categories(
        &self,
        _request: Request<ListSubCategoriesRequest>,
    ) -> Result<Response<ListSubCategoriesResponse>, Status> {
        records::handle_list_sub_categories(self.state.clone()).await
    }

    async fn update_sub_category(
        &self,
        request: Request<UpdateSubCategoryRequest>,
    ) -> Result<Response<ProtoSubCategory>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(id = req_payload.id, name = %req_payload.name, "Received UpdateSubCategoryRequest");
        records::handle_update_sub_category(req_payload, self.state.clone()).await
    }

    async fn remove_sub_category(
        &self,
        request: Request<RemoveSubCategoryRequest>,
    ) -> Result<Response<RemoveSubCategoryResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(id = req_payload.id, "Received RemoveSubCategoryRequest");
        records::handle_remove_sub_category(req_payload, self.state.clone()).await
    }

    async fn export_records(&self, request: Request<RecordFilter>) -> Result<Response<ExportResponse>, Status> {
        let filter = request.into_inner();
        tracing::info!(month = %filter.month, price_range = %filter.price_range, "Received ExportRecordsRequest");
        records::handle_export_records(filter, self.state.clone()).await
    }

    async fn project(&self, request: Request<ProjectRequest>) -> Result<Response<ProjectResponse>, Status> {
        tracing::info!("Received ProjectRequest");
        project::handle_project(request.into_inner()).await
    }

    async fn create_project(
        &self,
        request: Request<CreateProjectRequest>,
    ) -> Result<Response<ProtoLaunchProject>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(name = %req_payload.name, "Received CreateProjectRequest");
        projects::handle_create_project(req_payload, self.state.clone()).await
    }

    async fn list_projects(
        &self,
        _request: Request<ListProjectsRequest>,
    ) -> Result<Response<ListProjectsResponse>, Status> {
        projects::handle_list_projects(self.state.clone()).await
    }

    async fn update_project_inputs(
        &self,
        request: Request<UpdateProjectInputsRequest>,
    ) -> Result<Response<ProtoLaunchProject>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(project_id = %req_payload.id, "Received UpdateProjectInputsRequest");
        projects::handle_update_project_inputs(req_payload, self.state.clone()).await
    }

    async fn evaluate_project(&self, request: Request<ProjectIdRequest>) -> Result<Response<ProjectResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(project_id = %req_payload.id, "Received EvaluateProjectRequest");
        projects::handle_evaluate_project(req_payload, self.state.clone()).await
    }

    async fn export_projection(&self, request: Request<ProjectIdRequest>) -> Result<Response<ExportResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(project_id = %req_payload.id, "Received ExportProjectionRequest");
        projects::handle_export_projection(req_payload, self.state.clone()).await
    }

    async fn delete_project(
        &self,
        request: Request<ProjectIdRequest>,
    ) -> Result<Response<DeleteProjectResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(project_id = %req_payload.id, "Received DeleteProjectRequest");
        projects::handle_delete_project(req_payload, self.state.clone()).await
    }
}
