// Sub-categories configured under a product category, e.g. "一体式" and "分体式" for speakers.
use crate::error::{EngineError, Result};
use planner_shared::models::SubCategory;

#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    entries: Vec<SubCategory>,
    next_id: u32,
}

impl CategoryCatalog {
    pub fn new() -> Self {
        CategoryCatalog { entries: Vec::new(), next_id: 1 }
    }

    pub fn list(&self) -> &[SubCategory] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&SubCategory> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn add(&mut self, name: &str, description: &str) -> Result<&SubCategory> {
        let name = self.check_name(name, None)?;
        // Default derive leaves next_id at 0, ids start at 1 either way
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.entries.push(SubCategory {
            id,
            name,
            description: description.trim().to_string(),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn update(&mut self, id: u32, name: &str, description: &str) -> Result<()> {
        let name = self.check_name(name, Some(id))?;
        let entry = self
            .entries
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::CategoryError(format!("Sub-category {} does not exist", id)))?;
        entry.name = name;
        entry.description = description.trim().to_string();
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<SubCategory> {
        let pos = self
            .entries
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EngineError::CategoryError(format!("Sub-category {} does not exist", id)))?;
        Ok(self.entries.remove(pos))
    }

    // Category stamped on pasted rows: the first configured sub-category, else the fallback.
    pub fn ingest_category<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.entries.first().map_or(fallback, |s| s.name.as_str())
    }

    fn check_name(&self, name: &str, editing: Option<u32>) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::CategoryError("Sub-category name must not be blank".to_string()));
        }
        if self.entries.iter().any(|s| s.name == name && Some(s.id) != editing) {
            return Err(EngineError::CategoryError(format!("Sub-category '{}' already exists", name)));
        }
        Ok(name.to_string())
    }
}
