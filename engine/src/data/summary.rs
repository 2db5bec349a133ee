// Aggregates behind the summary and competition tabs.
use planner_shared::models::SalesRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandShare {
    pub brand: String,
    pub buyers: f64,
    pub estimated_sales: f64,
    // Share of total estimated sales, in percent.
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeTotal {
    pub price_range: String,
    pub records: usize,
    pub buyers: f64,
    pub estimated_sales: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub records: usize,
    pub total_buyers: f64,
    pub total_estimated_sales: f64,
    pub brands: Vec<BrandShare>,
    pub price_ranges: Vec<PriceRangeTotal>,
}

pub fn summarize(records: &[SalesRecord]) -> SalesSummary {
    let mut brands: Vec<BrandShare> = Vec::new();
    let mut price_ranges: Vec<PriceRangeTotal> = Vec::new();

    for record in records {
        match brands.iter_mut().find(|b| b.brand == record.brand) {
            Some(entry) => {
                entry.buyers += record.buyers;
                entry.estimated_sales += record.estimated_sales;
            }
            None => brands.push(BrandShare {
                brand: record.brand.clone(),
                buyers: record.buyers,
                estimated_sales: record.estimated_sales,
                share_pct: 0.0,
            }),
        }

        // Brackets keep first-seen order, which is the order the user pasted them in
        match price_ranges.iter_mut().find(|p| p.price_range == record.price_range) {
            Some(entry) => {
                entry.records += 1;
                entry.buyers += record.buyers;
                entry.estimated_sales += record.estimated_sales;
            }
            None => price_ranges.push(PriceRangeTotal {
                price_range: record.price_range.clone(),
                records: 1,
                buyers: record.buyers,
                estimated_sales: record.estimated_sales,
            }),
        }
    }

    let total_buyers: f64 = records.iter().map(|r| r.buyers).sum();
    let total_estimated_sales: f64 = records.iter().map(|r| r.estimated_sales).sum();

    for brand in &mut brands {
        brand.share_pct = if total_estimated_sales > 0.0 {
            brand.estimated_sales / total_estimated_sales * 100.0
        } else {
            0.0
        };
    }
    // Stable sort keeps first-seen order among ties.
    brands.sort_by(|a, b| b.estimated_sales.total_cmp(&a.estimated_sales));

    SalesSummary {
        records: records.len(),
        total_buyers,
        total_estimated_sales,
        brands,
        price_ranges,
    }
}
