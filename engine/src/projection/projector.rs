// Launch projection: market sizing -> volume -> revenue -> per-unit cost layers -> margins.
// Recomputed from scratch on every input change; there is nothing worth caching.
use planner_shared::models::{ManufacturingCostMode, ProjectionInputs, ProjectionResult};

const MONTHS_PER_YEAR: f64 = 12.0;

pub fn project(inputs: &ProjectionInputs) -> ProjectionResult {
    // Gross the observed channel volume up to the whole market. A zero share has no
    // meaningful answer, it yields an empty market instead of infinity.
    let total_market_volume = if inputs.baseline_channel_share == 0.0 {
        tracing::warn!(
            baseline_channel_volume = inputs.baseline_channel_volume,
            "Baseline channel share is zero, total market volume set to 0"
        );
        0.0
    } else {
        inputs.baseline_channel_volume / inputs.baseline_channel_share
    };

    let annual_sales_volume = total_market_volume * inputs.target_share;
    let lifecycle_sales_volume = annual_sales_volume * (inputs.lifecycle_months / MONTHS_PER_YEAR);

    let annual_revenue = annual_sales_volume * inputs.unit_price;
    let lifecycle_revenue = lifecycle_sales_volume * inputs.unit_price;

    let unit_variable_cost = inputs.bom_cost + unit_manufacturing_cost(inputs);

    // One-time investment spread over every unit sold during the lifecycle
    let unit_amortized_fixed = if lifecycle_sales_volume > 0.0 {
        inputs.total_fixed_investment() / lifecycle_sales_volume
    } else {
        0.0
    };

    let unit_operating_expense = inputs.unit_price * inputs.operating_expense_rate;

    let unit_gross_profit = inputs.unit_price - unit_variable_cost;
    let gross_margin_pct = margin_pct(unit_gross_profit, inputs.unit_price);

    let unit_pre_tax_profit = unit_gross_profit - unit_amortized_fixed - unit_operating_expense;
    // Losses are never taxed
    let unit_tax = if unit_pre_tax_profit > 0.0 {
        unit_pre_tax_profit * inputs.tax_rate
    } else {
        0.0
    };

    let unit_net_profit = unit_pre_tax_profit - unit_tax;
    let net_margin_pct = margin_pct(unit_net_profit, inputs.unit_price);

    ProjectionResult {
        total_market_volume,
        annual_sales_volume,
        lifecycle_sales_volume,
        annual_revenue,
        lifecycle_revenue,
        unit_variable_cost,
        unit_amortized_fixed,
        unit_operating_expense,
        unit_gross_profit,
        gross_margin_pct,
        unit_pre_tax_profit,
        unit_tax,
        unit_net_profit,
        net_margin_pct,
    }
}

fn unit_manufacturing_cost(inputs: &ProjectionInputs) -> f64 {
    match inputs.manufacturing {
        ManufacturingCostMode::Ratio { rate } => inputs.bom_cost * rate,
        ManufacturingCostMode::Fixed { amount } => amount,
    }
}

fn margin_pct(profit: f64, unit_price: f64) -> f64 {
    if unit_price > 0.0 {
        profit / unit_price * 100.0
    } else {
        0.0
    }
}
