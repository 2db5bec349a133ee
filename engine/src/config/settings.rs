// Engine settings, loaded from a JSON file or left at their defaults
use anyhow::{Context, Result};
use crate::error::EngineError;
use crate::projection::validate_inputs;
use planner_shared::models::ProjectionInputs;
use serde::Deserialize;
use std::path::Path;

pub use crate::data::ingest_parser::ColumnSplit;

// Environment variable naming the JSON settings file.
pub const CONFIG_ENV_VAR: &str = "PLANNER_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    // Category stamped on ingested rows when no sub-category has been configured yet.
    pub fallback_category: String,
    pub column_split: ColumnSplit,
    // Seed values for a newly created project.
    pub default_inputs: ProjectionInputs,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50061,
            log_level: "info".to_string(),
            fallback_category: "未分类".to_string(),
            column_split: ColumnSplit::Whitespace,
            default_inputs: ProjectionInputs::default(),
        }
    }
}

impl EngineSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;
        let settings: EngineSettings = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file '{}'", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    // Reads the file named by PLANNER_CONFIG, or returns the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => {
                tracing::debug!("{} not set, using default engine settings", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> std::result::Result<(), EngineError> {
        if self.fallback_category.trim().is_empty() {
            return Err(EngineError::ConfigError("fallback_category must not be blank".to_string()));
        }
        validate_inputs(&self.default_inputs)
            .map_err(|err| EngineError::ConfigError(format!("default_inputs rejected: {}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.bind_address(), "127.0.0.1:50061");
        assert_eq!(settings.column_split, ColumnSplit::Whitespace);
        assert_eq!(settings.default_inputs.bom_cost, 300.0);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_settings(r#"{ "port": 6000, "column_split": "tab", "default_inputs": { "unitPrice": 599 } }"#);
        let settings = EngineSettings::load(file.path()).unwrap();
        assert_eq!(settings.port, 6000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.column_split, ColumnSplit::Tab);
        assert_eq!(settings.default_inputs.unit_price, 599.0);
        assert_eq!(settings.default_inputs.tax_rate, 0.25);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineSettings::load("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }

    #[test]
    fn test_load_rejects_blank_fallback_category() {
        let file = write_settings(r#"{ "fallback_category": "  " }"#);
        let err = EngineSettings::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("fallback_category"));
        assert!(matches!(err.downcast_ref::<EngineError>(), Some(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite_default_inputs() {
        let mut settings = EngineSettings::default();
        settings.default_inputs.unit_price = f64::INFINITY;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(ref msg) if msg.contains("unit_price")));
        assert!(EngineSettings::default().validate().is_ok());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_settings("{ port: ");
        let err = EngineSettings::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }
}
