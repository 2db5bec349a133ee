// Conversions between domain values and their protobuf counterparts, and error mapping
use crate::services::{
    ProtoBrandShare, ProtoLaunchProject, ProtoPriceRangeTotal, ProtoProjectionInputs,
    ProtoProjectionResult, ProtoSalesRecord, ProtoSubCategory, SummarizeResponse,
};
use planner_engine::data::summary::SalesSummary;
use planner_engine::projection::{parse_manufacturing_mode, validate_inputs};
use planner_engine::EngineError;
use planner_shared::models::{
    ManufacturingCostMode, Project, ProjectionInputs, ProjectionResult, RecordId,
    SalesRecord as DomainSalesRecord, SubCategory,
};
use tonic::Status;

pub fn to_status(err: EngineError) -> Status {
    tracing::error!("Mapping EngineError to tonic::Status: {:?}", err);
    match err {
        EngineError::InvalidInput(msg) => Status::invalid_argument(msg),
        EngineError::CategoryError(msg) => Status::invalid_argument(msg),
        EngineError::RecordNotFound(id) => Status::not_found(format!("Record not found: {}", id)),
        EngineError::ConfigError(msg) => Status::failed_precondition(format!("Configuration error: {}", msg)),
        other => Status::internal(format!("An internal error occurred: {}", other)),
    }
}

pub fn to_grpc_record(id: &RecordId, record: &DomainSalesRecord) -> ProtoSalesRecord {
    ProtoSalesRecord {
        id: id.to_string(),
        title: record.title.clone(),
        brand: record.brand.clone(),
        buyers: record.buyers,
        visitors: record.visitors,
        estimated_sales: record.estimated_sales,
        conversion_rate: record.conversion_rate,
        month: record.month.clone(),
        price_range: record.price_range.clone(),
        category: record.category.clone(),
    }
}

pub fn to_grpc_sub_category(sub: &SubCategory) -> ProtoSubCategory {
    ProtoSubCategory {
        id: sub.id,
        name: sub.name.clone(),
        description: sub.description.clone(),
    }
}

pub fn to_grpc_summary(summary: &SalesSummary) -> SummarizeResponse {
    SummarizeResponse {
        records: summary.records as u32,
        total_buyers: summary.total_buyers,
        total_estimated_sales: summary.total_estimated_sales,
        brands: summary
            .brands
            .iter()
            .map(|b| ProtoBrandShare {
                brand: b.brand.clone(),
                buyers: b.buyers,
                estimated_sales: b.estimated_sales,
                share_pct: b.share_pct,
            })
            .collect(),
        price_ranges: summary
            .price_ranges
            .iter()
            .map(|p| ProtoPriceRangeTotal {
                price_range: p.price_range.clone(),
                records: p.records as u32,
                buyers: p.buyers,
                estimated_sales: p.estimated_sales,
            })
            .collect(),
    }
}

// Validates at the boundary: unknown modes and non-finite numbers never reach the projector.
pub fn from_grpc_inputs(proto: &ProtoProjectionInputs) -> Result<ProjectionInputs, EngineError> {
    let inputs = ProjectionInputs {
        baseline_channel_volume: proto.baseline_channel_volume,
        baseline_channel_share: proto.baseline_channel_share,
        target_share: proto.target_share,
        unit_price: proto.unit_price,
        lifecycle_months: proto.lifecycle_months,
        bom_cost: proto.bom_cost,
        manufacturing: parse_manufacturing_mode(&proto.manufacturing_mode, proto.manufacturing_value)?,
        mold_fee: proto.mold_fee,
        fixture_fee: proto.fixture_fee,
        rd_labor_cost: proto.rd_labor_cost,
        rd_material_cost: proto.rd_material_cost,
        operating_expense_rate: proto.operating_expense_rate,
        tax_rate: proto.tax_rate,
    };
    validate_inputs(&inputs)?;
    Ok(inputs)
}

pub fn to_grpc_inputs(inputs: &ProjectionInputs) -> ProtoProjectionInputs {
    let (manufacturing_mode, manufacturing_value) = match inputs.manufacturing {
        ManufacturingCostMode::Ratio { rate } => ("ratio", rate),
        ManufacturingCostMode::Fixed { amount } => ("fixed", amount),
    };
    ProtoProjectionInputs {
        baseline_channel_volume: inputs.baseline_channel_volume,
        baseline_channel_share: inputs.baseline_channel_share,
        target_share: inputs.target_share,
        unit_price: inputs.unit_price,
        lifecycle_months: inputs.lifecycle_months,
        bom_cost: inputs.bom_cost,
        manufacturing_mode: manufacturing_mode.to_string(),
        manufacturing_value,
        mold_fee: inputs.mold_fee,
        fixture_fee: inputs.fixture_fee,
        rd_labor_cost: inputs.rd_labor_cost,
        rd_material_cost: inputs.rd_material_cost,
        operating_expense_rate: inputs.operating_expense_rate,
        tax_rate: inputs.tax_rate,
    }
}

pub fn to_grpc_project(project: &Project) -> ProtoLaunchProject {
    ProtoLaunchProject {
        id: project.id.to_string(),
        name: project.name.clone(),
        description: project.description.clone(),
        price_range: project.price_range.clone(),
        sub_category: project.sub_category.clone(),
        inputs: Some(to_grpc_inputs(&project.inputs)),
    }
}

pub fn to_grpc_result(result: &ProjectionResult) -> ProtoProjectionResult {
    ProtoProjectionResult {
        total_market_volume: result.total_market_volume,
        annual_sales_volume: result.annual_sales_volume,
        lifecycle_sales_volume: result.lifecycle_sales_volume,
        annual_revenue: result.annual_revenue,
        lifecycle_revenue: result.lifecycle_revenue,
        unit_variable_cost: result.unit_variable_cost,
        unit_amortized_fixed: result.unit_amortized_fixed,
        unit_operating_expense: result.unit_operating_expense,
        unit_gross_profit: result.unit_gross_profit,
        gross_margin_pct: result.gross_margin_pct,
        unit_pre_tax_profit: result.unit_pre_tax_profit,
        unit_tax: result.unit_tax,
        unit_net_profit: result.unit_net_profit,
        net_margin_pct: result.net_margin_pct,
    }
}

// Buffered CSV writers produce UTF-8 as long as every field was UTF-8.
pub fn csv_text(buffer: Vec<u8>) -> Result<String, Status> {
    String::from_utf8(buffer)
        .map_err(|e| Status::internal(format!("Export produced invalid UTF-8: {}", e)))
}

// Empty strings on the wire mean "no filter".
pub fn optional_filter(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
