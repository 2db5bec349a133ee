use planner_engine::data::catalog::CategoryCatalog;
use planner_engine::data::record_store::{RecordStore, SequentialIds};
use planner_engine::data::summary::summarize;
use planner_engine::projection::{project, ProjectBook};
use planner_engine::{ingest, EngineError};
use planner_shared::models::{ManufacturingCostMode, ProjectionInputs};
use planner_shared::utils::display_format::{format_currency, format_percent, format_units};

const JUNE_REPORT: &str = "\
1 漫步者G2000 旗舰店 电竞音箱 1.2万 6万
2 雷蛇利维坦 旗舰店 电竞音箱 8,000 4万
3 惠威M200 自营 电竞音箱 3000-5000 2万
总计 149,655";

#[test]
fn paste_store_and_summarize() {
    let mut catalog = CategoryCatalog::new();
    catalog.add("一体式", "条形或矩形的单个电竞音箱").unwrap();
    let mut store = RecordStore::new(Box::new(SequentialIds::new("rec")));

    let category = catalog.ingest_category("未分类").to_string();
    let outcome = ingest(JUNE_REPORT, "2024-06", "200-300", &category, &store.prior_records());
    assert_eq!(outcome.accepted.len(), 3);
    assert_eq!(outcome.skipped_malformed, 1);
    store.insert_accepted(&outcome);

    // Same paste again: nothing new lands in the store
    let again = ingest(JUNE_REPORT, "2024-06", "200-300", &category, &store.prior_records());
    assert_eq!(again.accepted.len(), 0);
    assert_eq!(again.skipped_duplicates, 3);
    store.insert_accepted(&again);

    let summary = summarize(&store.records_for(Some("2024-06"), None));
    assert_eq!(summary.records, 3);
    assert_eq!(summary.total_buyers, 12_000.0 + 8_000.0 + 4_000.0);
    assert_eq!(summary.total_estimated_sales, 24_000.0 * 250.0);
    assert_eq!(summary.brands[0].brand, "漫步者G2000");
    assert!(store.iter().all(|(_, r)| r.category == "一体式"));
}

#[test]
fn project_from_book_and_render() {
    let mut book = ProjectBook::new(Box::new(SequentialIds::new("prj")), ProjectionInputs::default());
    let id = book.create("电竞音箱", "", "200-300元", "一体式").unwrap().id.clone();
    let inputs = ProjectionInputs {
        baseline_channel_volume: 149_655.0,
        manufacturing: ManufacturingCostMode::Ratio { rate: 0.10 },
        ..ProjectionInputs::default()
    };
    book.update_inputs(&id, inputs.clone()).unwrap();

    let result = book.evaluate(&id).unwrap();
    assert_eq!(result, project(&inputs));
    assert_eq!(format_units(result.total_market_volume), "498,850");
    assert_eq!(format_currency(result.annual_revenue), "¥24,942,500.00");
    assert_eq!(format_percent(result.gross_margin_pct), "67.00 %");
    assert_eq!(format_percent(result.net_margin_pct), "37.50 %");

    let missing = book.evaluate(&"prj-9".into());
    assert!(matches!(missing, Err(EngineError::RecordNotFound(_))));
}
