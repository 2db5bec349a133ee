use planner_engine::config::{ColumnSplit, EngineSettings};
use planner_engine::data::catalog::CategoryCatalog;
use planner_engine::data::record_store::{RecordStore, UuidGenerator};
use planner_engine::projection::ProjectBook;

// Everything the service mutates between calls.
pub struct PlannerState {
    pub records: RecordStore,
    pub catalog: CategoryCatalog,
    pub projects: ProjectBook,
    pub fallback_category: String,
    pub column_split: ColumnSplit,
}

impl PlannerState {
    pub fn from_settings(settings: &EngineSettings) -> Self {
        PlannerState {
            records: RecordStore::new(Box::new(UuidGenerator)),
            catalog: CategoryCatalog::new(),
            projects: ProjectBook::new(Box::new(UuidGenerator), settings.default_inputs.clone()),
            fallback_category: settings.fallback_category.clone(),
            column_split: settings.column_split,
        }
    }

    // Category for a paste: the caller's choice, else the first sub-category, else the fallback.
    pub fn resolve_category(&self, requested: &str) -> String {
        let requested = requested.trim();
        if requested.is_empty() {
            self.catalog.ingest_category(&self.fallback_category).to_string()
        } else {
            requested.to_string()
        }
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}
