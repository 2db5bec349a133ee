// Unit-economics projection for a planned product launch
pub mod project_book;
pub mod projector;

pub use project_book::ProjectBook;
pub use projector::project;

use crate::error::EngineError;
use planner_shared::models::{ManufacturingCostMode, ProjectionInputs};

// Boundary check for values arriving from forms or the wire. Only non-finite numbers are
// refused; negative or zero values are legitimate what-if inputs.
pub fn validate_inputs(inputs: &ProjectionInputs) -> Result<(), EngineError> {
    let (mode_field, mode_value) = match inputs.manufacturing {
        ManufacturingCostMode::Ratio { rate } => ("manufacturing.rate", rate),
        ManufacturingCostMode::Fixed { amount } => ("manufacturing.amount", amount),
    };
    let fields = [
        ("baseline_channel_volume", inputs.baseline_channel_volume),
        ("baseline_channel_share", inputs.baseline_channel_share),
        ("target_share", inputs.target_share),
        ("unit_price", inputs.unit_price),
        ("lifecycle_months", inputs.lifecycle_months),
        ("bom_cost", inputs.bom_cost),
        (mode_field, mode_value),
        ("mold_fee", inputs.mold_fee),
        ("fixture_fee", inputs.fixture_fee),
        ("rd_labor_cost", inputs.rd_labor_cost),
        ("rd_material_cost", inputs.rd_material_cost),
        ("operating_expense_rate", inputs.operating_expense_rate),
        ("tax_rate", inputs.tax_rate),
    ];

    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(EngineError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            name, value
        ))),
        None => Ok(()),
    }
}

// Parses the mode names used by the calculator form.
pub fn parse_manufacturing_mode(mode: &str, value: f64) -> Result<ManufacturingCostMode, EngineError> {
    match mode.trim().to_lowercase().as_str() {
        "ratio" => Ok(ManufacturingCostMode::Ratio { rate: value }),
        "fixed" => Ok(ManufacturingCostMode::Fixed { amount: value }),
        other => Err(EngineError::InvalidInput(format!(
            "Unknown manufacturing cost mode '{}'. Use 'ratio' or 'fixed'.",
            other
        ))),
    }
}
