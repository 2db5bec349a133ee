// Launch projects listed on the project management page, each carrying its own calculator inputs.
use super::{project, validate_inputs};
use crate::data::record_store::IdGenerator;
use crate::error::{EngineError, Result};
use planner_shared::models::{Project, ProjectionInputs, ProjectionResult, RecordId};

pub struct ProjectBook {
    ids: Box<dyn IdGenerator>,
    projects: Vec<Project>,
    default_inputs: ProjectionInputs,
}

impl ProjectBook {
    // `default_inputs` seeds every newly created project.
    pub fn new(ids: Box<dyn IdGenerator>, default_inputs: ProjectionInputs) -> Self {
        ProjectBook {
            ids,
            projects: Vec::new(),
            default_inputs,
        }
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &RecordId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn create(
        &mut self,
        name: &str,
        description: &str,
        price_range: &str,
        sub_category: &str,
    ) -> Result<&Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidInput("Project name must not be blank".to_string()));
        }
        let project = Project {
            id: self.ids.next_id(),
            name: name.to_string(),
            description: description.trim().to_string(),
            price_range: price_range.to_string(),
            sub_category: sub_category.to_string(),
            inputs: self.default_inputs.clone(),
        };
        tracing::info!(project_id = %project.id, name = %project.name, "Created launch project");
        self.projects.push(project);
        Ok(&self.projects[self.projects.len() - 1])
    }

    pub fn update_inputs(&mut self, id: &RecordId, inputs: ProjectionInputs) -> Result<()> {
        validate_inputs(&inputs)?;
        let project = self
            .projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| EngineError::RecordNotFound(id.to_string()))?;
        project.inputs = inputs;
        Ok(())
    }

    pub fn delete(&mut self, id: &RecordId) -> Result<Project> {
        let pos = self
            .projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| EngineError::RecordNotFound(id.to_string()))?;
        Ok(self.projects.remove(pos))
    }

    pub fn evaluate(&self, id: &RecordId) -> Result<ProjectionResult> {
        self.get(id)
            .map(|p| project(&p.inputs))
            .ok_or_else(|| EngineError::RecordNotFound(id.to_string()))
    }
}
