use crate::error::EngineError;
use chrono::NaiveDate;
use planner_shared::models::{IngestOutcome, SalesRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Number and price-bracket handling for values copied out of marketplace reports.
// Values look like "1,234", "5万", "1万-2万", "100~200"; brackets like "200-300元" or "10000以上".
pub mod magnitude {
    pub const TEN_THOUSAND_MARKER: char = '万';
    const RANGE_SEPARATORS: [char; 3] = ['-', '~', '～'];
    const OPEN_ENDED_MARKERS: [&str; 3] = ["以上", "+", "above"];

    // Resolves a report cell to a number. Ranges resolve to the mean of their endpoints,
    // "万" scales by 10,000, anything unparseable is 0.
    pub fn resolve_magnitude(raw: &str) -> f64 {
        let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '，').collect();

        match split_range(&cleaned) {
            Some((low, high)) => (resolve_single(low) + resolve_single(high)) / 2.0,
            None => resolve_single(&cleaned),
        }
    }

    // Representative price of a bracket label, used to turn buyer counts into sales.
    pub fn price_midpoint(label: &str) -> f64 {
        let cleaned = label.replace(',', "");
        let bounds = integer_runs(&cleaned);
        let lowered = cleaned.to_lowercase();

        if OPEN_ENDED_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            return bounds.iter().copied().reduce(f64::min).unwrap_or(0.0);
        }
        match bounds.as_slice() {
            [] => 0.0,
            [single] => *single,
            [low, high, ..] => (low + high) / 2.0,
        }
    }

    // A separator only counts when there is text on both sides, so "-5" stays a number.
    fn split_range(s: &str) -> Option<(&str, &str)> {
        let (idx, sep) = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| RANGE_SEPARATORS.contains(c))?;
        let (low, high) = (s[..idx].trim(), s[idx + sep.len_utf8()..].trim());
        if low.is_empty() || high.is_empty() {
            return None;
        }
        Some((low, high))
    }

    fn resolve_single(s: &str) -> f64 {
        let scale = if s.contains(TEN_THOUSAND_MARKER) { 10_000.0 } else { 1.0 };
        first_number(s).map_or(0.0, |n| n * scale)
    }

    // First decimal number embedded in `s`, e.g. "约1.5万+" -> 1.5.
    fn first_number(s: &str) -> Option<f64> {
        let mut start = s.find(|c: char| c.is_ascii_digit())?;
        if s[..start].ends_with('.') {
            start -= 1;
        }
        let negative = s[..start].ends_with('-');

        let mut end = start;
        let mut seen_dot = false;
        for (offset, c) in s[start..].char_indices() {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            end = start + offset + c.len_utf8();
        }

        let value: f64 = s[start..end].trim_end_matches('.').parse().ok()?;
        Some(if negative { -value } else { value })
    }

    fn integer_runs(s: &str) -> Vec<f64> {
        s.split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .filter_map(|run| run.parse::<f64>().ok())
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_resolve_range() {
            assert_eq!(resolve_magnitude("100-200"), 150.0);
            assert_eq!(resolve_magnitude("100~200"), 150.0);
            assert_eq!(resolve_magnitude("100 ～ 300"), 200.0);
        }

        #[test]
        fn test_resolve_ten_thousand_marker() {
            assert_eq!(resolve_magnitude("5万"), 50_000.0);
            assert_eq!(resolve_magnitude("1.5万+"), 15_000.0);
            assert_eq!(resolve_magnitude("1万-2万"), 15_000.0);
        }

        #[test]
        fn test_resolve_thousands_separator() {
            assert_eq!(resolve_magnitude("1,234"), 1234.0);
            assert_eq!(resolve_magnitude("12,345.5"), 12345.5);
        }

        #[test]
        fn test_resolve_plain_and_negative() {
            assert_eq!(resolve_magnitude("42"), 42.0);
            assert_eq!(resolve_magnitude(".5"), 0.5);
            assert_eq!(resolve_magnitude("-5"), -5.0);
        }

        #[test]
        fn test_resolve_unparseable_is_zero() {
            assert_eq!(resolve_magnitude(""), 0.0);
            assert_eq!(resolve_magnitude("n/a"), 0.0);
            assert_eq!(resolve_magnitude("-"), 0.0);
            assert_eq!(resolve_magnitude("万"), 0.0);
        }

        #[test]
        fn test_price_midpoint() {
            assert_eq!(price_midpoint("200-300"), 250.0);
            assert_eq!(price_midpoint("200-300元"), 250.0);
            assert_eq!(price_midpoint("100"), 100.0);
            assert_eq!(price_midpoint("1,000-2,000"), 1500.0);
        }

        #[test]
        fn test_price_midpoint_open_ended() {
            assert_eq!(price_midpoint("10000以上"), 10_000.0);
            assert_eq!(price_midpoint("5000+"), 5_000.0);
            assert_eq!(price_midpoint("800 and above"), 800.0);
        }

        #[test]
        fn test_price_midpoint_no_numbers() {
            assert_eq!(price_midpoint("全部"), 0.0);
            assert_eq!(price_midpoint("以上"), 0.0);
        }
    }
}

// How a pasted line is cut into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSplit {
    // Runs of any whitespace; titles must not contain spaces.
    #[default]
    Whitespace,
    // Tab separated spreadsheet paste; cells keep their inner spaces.
    Tab,
}

// Column layout of a report row: rank, title, two unused columns, buyers, visitors.
const TITLE_COLUMN: usize = 1;
const BUYERS_COLUMN: usize = 4;
const VISITORS_COLUMN: usize = 5;
const MIN_COLUMNS: usize = 5;

// Checks the reporting month has the "YYYY-MM" shape before rows are stamped with it.
pub fn validate_month(month: &str) -> Result<(), EngineError> {
    let well_formed = month.len() == 7
        && NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_ok();
    if well_formed {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(format!(
            "Reporting month '{}' is not in YYYY-MM form",
            month
        )))
    }
}

#[derive(Debug, Clone, Default)]
pub struct IngestParser {
    split: ColumnSplit,
}

impl IngestParser {
    pub fn new(split: ColumnSplit) -> Self {
        IngestParser { split }
    }

    // Parses every line of `raw_text` into a record stamped with the ambient month, bracket
    // and category. Short rows and rows already present in `prior_records` (or earlier in the
    // same paste) are counted and skipped; this never fails.
    pub fn ingest(
        &self,
        raw_text: &str,
        month: &str,
        price_range: &str,
        category: &str,
        prior_records: &[SalesRecord],
    ) -> IngestOutcome {
        let mut seen: HashSet<(String, String, String)> = prior_records
            .iter()
            .map(|r| (r.title.clone(), r.month.clone(), r.price_range.clone()))
            .collect();
        let unit_price = magnitude::price_midpoint(price_range);
        let mut outcome = IngestOutcome::default();

        // A blank line has no cells and counts as malformed like any other short row
        for (idx, line) in raw_text.lines().enumerate() {
            let cells = self.split_cells(line);
            let parsed = self.parse_row(&cells, unit_price, month, price_range, category);
            let Some(record) = parsed else {
                tracing::debug!(line = idx + 1, cells = cells.len(), "Skipping malformed row");
                outcome.skipped_malformed += 1;
                continue;
            };

            let key = (record.title.clone(), record.month.clone(), record.price_range.clone());
            if !seen.insert(key) {
                tracing::debug!(line = idx + 1, title = %record.title, "Skipping duplicate row");
                outcome.skipped_duplicates += 1;
                continue;
            }
            outcome.accepted.push(record);
        }

        tracing::info!(
            month,
            price_range,
            category,
            accepted = outcome.accepted.len(),
            skipped_duplicates = outcome.skipped_duplicates,
            skipped_malformed = outcome.skipped_malformed,
            "Ingested pasted report"
        );
        outcome
    }

    fn split_cells<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.split {
            ColumnSplit::Whitespace => line.split_whitespace().collect(),
            ColumnSplit::Tab => line.trim_end_matches('\r').split('\t').map(str::trim).collect(),
        }
    }

    fn parse_row(
        &self,
        cells: &[&str],
        unit_price: f64,
        month: &str,
        price_range: &str,
        category: &str,
    ) -> Option<SalesRecord> {
        if cells.len() < MIN_COLUMNS {
            return None;
        }
        let title = cells[TITLE_COLUMN];
        // Only reachable with tab splitting, whitespace splitting never yields empty cells
        if title.is_empty() {
            return None;
        }

        let buyers = magnitude::resolve_magnitude(cells[BUYERS_COLUMN]);
        let visitors = cells
            .get(VISITORS_COLUMN)
            .map_or(0.0, |cell| magnitude::resolve_magnitude(cell));
        let conversion_rate = if visitors > 0.0 {
            (buyers / visitors * 100.0 * 100.0).round() / 100.0
        } else {
            0.0
        };

        Some(SalesRecord {
            title: title.to_string(),
            brand: title.split_whitespace().next().unwrap_or_default().to_string(),
            buyers,
            visitors,
            estimated_sales: buyers * unit_price,
            conversion_rate,
            month: month.to_string(),
            price_range: price_range.to_string(),
            category: category.to_string(),
        })
    }
}

// Whitespace-column ingest, the behaviour the paste box uses by default.
pub fn ingest(
    raw_text: &str,
    month: &str,
    price_range: &str,
    category: &str,
    prior_records: &[SalesRecord],
) -> IngestOutcome {
    IngestParser::default().ingest(raw_text, month, price_range, category, prior_records)
}
