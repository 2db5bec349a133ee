// Generated protobuf code for the planner service
pub mod planner {
    tonic::include_proto!("planner");
}

pub use planner::planner_service_server::{PlannerService, PlannerServiceServer};
pub use planner::{
    AddSubCategoryRequest, BrandShare as ProtoBrandShare, CreateProjectRequest, DeleteProjectResponse,
    DeleteRecordRequest, DeleteRecordResponse, ExportResponse, IngestRequest, IngestResponse,
    LaunchProject as ProtoLaunchProject, ListProjectsRequest, ListProjectsResponse,
    ListRecordsResponse, ListSubCategoriesRequest, ListSubCategoriesResponse,
    PriceRangeTotal as ProtoPriceRangeTotal, ProjectIdRequest, ProjectRequest, ProjectResponse,
    ProjectionInputs as ProtoProjectionInputs, ProjectionResult as ProtoProjectionResult,
    RecordFilter, RemoveSubCategoryRequest, RemoveSubCategoryResponse,
    SalesRecord as ProtoSalesRecord, SubCategory as ProtoSubCategory, SummarizeResponse,
    UpdateProjectInputsRequest, UpdateSubCategoryRequest,
};

pub mod planner_service;
