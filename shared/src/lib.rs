pub mod models;
pub mod utils;

pub use models::{
    IngestOutcome, ManufacturingCostMode, Project, ProjectionInputs, ProjectionResult, RecordId,
    SalesRecord, SubCategory,
};
