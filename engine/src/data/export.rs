// CSV export of ingested records and of a projection result.
use crate::error::Result;
use csv::WriterBuilder;
use planner_shared::models::{ProjectionResult, SalesRecord};
use std::io::Write;

const RECORD_HEADER: [&str; 9] = [
    "title",
    "brand",
    "buyers",
    "visitors",
    "estimated_sales",
    "conversion_rate",
    "month",
    "price_range",
    "category",
];

pub fn export_records<W: Write>(writer: W, records: &[SalesRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(RECORD_HEADER)?;
    for record in records {
        wtr.write_record([
            record.title.clone(),
            record.brand.clone(),
            record.buyers.to_string(),
            record.visitors.to_string(),
            record.estimated_sales.to_string(),
            record.conversion_rate.to_string(),
            record.month.clone(),
            record.price_range.clone(),
            record.category.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

// One "metric,value" row per figure, in waterfall order.
pub fn export_projection<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let rows = [
        ("total_market_volume", result.total_market_volume),
        ("annual_sales_volume", result.annual_sales_volume),
        ("lifecycle_sales_volume", result.lifecycle_sales_volume),
        ("annual_revenue", result.annual_revenue),
        ("lifecycle_revenue", result.lifecycle_revenue),
        ("unit_variable_cost", result.unit_variable_cost),
        ("unit_amortized_fixed", result.unit_amortized_fixed),
        ("unit_operating_expense", result.unit_operating_expense),
        ("unit_gross_profit", result.unit_gross_profit),
        ("gross_margin_pct", result.gross_margin_pct),
        ("unit_pre_tax_profit", result.unit_pre_tax_profit),
        ("unit_tax", result.unit_tax),
        ("unit_net_profit", result.unit_net_profit),
        ("net_margin_pct", result.net_margin_pct),
    ];

    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(["metric", "value"])?;
    for (metric, value) in rows {
        wtr.write_record([metric.to_string(), value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
