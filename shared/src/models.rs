use serde::{Deserialize, Serialize};
use std::fmt;

// Identifier handed out by the owner of a record collection. The core never mints these
// itself; see `planner_engine::data::record_store::IdGenerator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

/// One product row taken from a pasted sales report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub title: String,
    pub brand: String,
    pub buyers: f64,
    #[serde(default)]
    pub visitors: f64,
    pub estimated_sales: f64,
    /// Percentage, rounded to two decimals.
    pub conversion_rate: f64,
    pub month: String,
    pub price_range: String,
    pub category: String,
}

impl SalesRecord {
    // (title, month, price range) is what makes two rows "the same row".
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.title, &self.month, &self.price_range)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestOutcome {
    pub accepted: Vec<SalesRecord>,
    pub skipped_duplicates: usize,
    pub skipped_malformed: usize,
}

impl IngestOutcome {
    pub fn total_skipped(&self) -> usize {
        self.skipped_duplicates + self.skipped_malformed
    }
}

/// How the per-unit manufacturing cost is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ManufacturingCostMode {
    /// Fraction of the BOM cost, e.g. 0.10.
    Ratio { rate: f64 },
    /// Flat amount per unit.
    Fixed { amount: f64 },
}

impl Default for ManufacturingCostMode {
    fn default() -> Self {
        ManufacturingCostMode::Ratio { rate: 0.10 }
    }
}

/// Form fields of the unit-economics calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionInputs {
    pub baseline_channel_volume: f64,
    /// Fraction of the total market the baseline channel represents, e.g. 0.30.
    pub baseline_channel_share: f64,
    pub target_share: f64,
    pub unit_price: f64,
    pub lifecycle_months: f64,
    pub bom_cost: f64,
    pub manufacturing: ManufacturingCostMode,
    pub mold_fee: f64,
    pub fixture_fee: f64,
    pub rd_labor_cost: f64,
    pub rd_material_cost: f64,
    /// Applied to unit price.
    pub operating_expense_rate: f64,
    pub tax_rate: f64,
}

impl ProjectionInputs {
    pub fn total_fixed_investment(&self) -> f64 {
        self.mold_fee + self.fixture_fee + self.rd_labor_cost + self.rd_material_cost
    }
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        // Starting values of a freshly created project.
        ProjectionInputs {
            baseline_channel_volume: 0.0,
            baseline_channel_share: 0.30,
            target_share: 0.05,
            unit_price: 1000.0,
            lifecycle_months: 36.0,
            bom_cost: 300.0,
            manufacturing: ManufacturingCostMode::default(),
            mold_fee: 500_000.0,
            fixture_fee: 0.0,
            rd_labor_cost: 1_000_000.0,
            rd_material_cost: 0.0,
            operating_expense_rate: 0.15,
            tax_rate: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub total_market_volume: f64,
    pub annual_sales_volume: f64,
    pub lifecycle_sales_volume: f64,
    pub annual_revenue: f64,
    pub lifecycle_revenue: f64,
    pub unit_variable_cost: f64,
    pub unit_amortized_fixed: f64,
    pub unit_operating_expense: f64,
    pub unit_gross_profit: f64,
    pub gross_margin_pct: f64,
    pub unit_pre_tax_profit: f64,
    pub unit_tax: f64,
    pub unit_net_profit: f64,
    pub net_margin_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A launch plan the calculator is run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_range: String,
    pub sub_category: String,
    pub inputs: ProjectionInputs,
}
