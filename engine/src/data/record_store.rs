// Insertion-ordered collection of ingested sales records.
// The application owns one of these; the parser only ever reads `prior_records()` from it.
use crate::error::{EngineError, Result};
use planner_shared::models::{IngestOutcome, RecordId, SalesRecord};
use std::collections::HashMap;
use uuid::Uuid;

// Source of record identifiers. Injected so that tests and persistence layers can choose.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> RecordId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> RecordId {
        RecordId(Uuid::new_v4().to_string())
    }
}

// Predictable ids ("rec-1", "rec-2", ...).
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        SequentialIds { prefix: prefix.to_string(), next: 1 }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> RecordId {
        let id = RecordId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

pub struct RecordStore {
    ids: Box<dyn IdGenerator>,
    order: Vec<RecordId>,
    records: HashMap<RecordId, SalesRecord>,
}

impl RecordStore {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        RecordStore {
            ids,
            order: Vec::new(),
            records: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&SalesRecord> {
        self.records.get(id)
    }

    // Records in insertion order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (&RecordId, &SalesRecord)> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).map(|record| (id, record)))
    }

    // Snapshot handed to the parser for duplicate detection.
    pub fn prior_records(&self) -> Vec<SalesRecord> {
        self.iter().map(|(_, record)| record.clone()).collect()
    }

    // Stores every accepted record from an ingest run, returning the new ids in order.
    pub fn insert_accepted(&mut self, outcome: &IngestOutcome) -> Vec<RecordId> {
        outcome
            .accepted
            .iter()
            .map(|record| self.insert(record.clone()))
            .collect()
    }

    pub fn insert(&mut self, record: SalesRecord) -> RecordId {
        let id = self.ids.next_id();
        self.order.push(id.clone());
        self.records.insert(id.clone(), record);
        id
    }

    // Swaps in an edited record, keeping its position. Editing a record into the key of
    // another existing record is refused, it would defeat duplicate detection.
    pub fn replace(&mut self, id: &RecordId, record: SalesRecord) -> Result<SalesRecord> {
        if !self.records.contains_key(id) {
            return Err(EngineError::RecordNotFound(id.to_string()));
        }
        let clash = self
            .iter()
            .any(|(other_id, other)| other_id != id && other.dedup_key() == record.dedup_key());
        if clash {
            return Err(EngineError::InvalidInput(format!(
                "A record for '{}' in {} / {} already exists",
                record.title, record.month, record.price_range
            )));
        }
        self.records
            .insert(id.clone(), record)
            .ok_or_else(|| EngineError::RecordNotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &RecordId) -> Result<SalesRecord> {
        let record = self
            .records
            .remove(id)
            .ok_or_else(|| EngineError::RecordNotFound(id.to_string()))?;
        self.order.retain(|existing| existing != id);
        Ok(record)
    }

    // Filter used by the reporting views, either side may be left open.
    pub fn filtered<'a>(
        &'a self,
        month: Option<&'a str>,
        price_range: Option<&'a str>,
    ) -> impl Iterator<Item = (&'a RecordId, &'a SalesRecord)> + 'a {
        self.iter()
            .filter(move |(_, r)| month.map_or(true, |m| r.month == m))
            .filter(move |(_, r)| price_range.map_or(true, |p| r.price_range == p))
    }

    pub fn records_for(&self, month: Option<&str>, price_range: Option<&str>) -> Vec<SalesRecord> {
        self.filtered(month, price_range).map(|(_, record)| record.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ingest_parser::ingest;

    fn sequential_store() -> RecordStore {
        RecordStore::new(Box::new(SequentialIds::new("rec")))
    }

    const REPORT: &str = "1 A x y 10 100\n2 B x y 20 100\n3 C x y 30";

    #[test]
    fn test_insert_keeps_order_and_ids() {
        let mut store = sequential_store();
        let outcome = ingest(REPORT, "2024-06", "100", "c", &store.prior_records());
        let ids = store.insert_accepted(&outcome);

        assert_eq!(ids, vec![RecordId::from("rec-1"), RecordId::from("rec-2"), RecordId::from("rec-3")]);
        let titles: Vec<_> = store.iter().map(|(_, r)| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_prior_records_feed_dedup() {
        let mut store = sequential_store();
        let first = ingest(REPORT, "2024-06", "100", "c", &store.prior_records());
        store.insert_accepted(&first);

        let second = ingest(REPORT, "2024-06", "100", "c", &store.prior_records());
        assert_eq!(second.skipped_duplicates, 3);
        store.insert_accepted(&second);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_then_reingest() {
        let mut store = sequential_store();
        let outcome = ingest(REPORT, "2024-06", "100", "c", &[]);
        store.insert_accepted(&outcome);

        let removed = store.remove(&RecordId::from("rec-2")).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(store.len(), 2);

        let again = ingest(REPORT, "2024-06", "100", "c", &store.prior_records());
        assert_eq!(again.accepted.len(), 1);
        assert_eq!(again.accepted[0].title, "B");
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = sequential_store();
        let err = store.remove(&RecordId::from("nope")).unwrap_err();
        assert!(matches!(err, EngineError::RecordNotFound(_)));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = sequential_store();
        store.insert_accepted(&ingest(REPORT, "2024-06", "100", "c", &[]));

        let id = RecordId::from("rec-1");
        let mut edited = store.get(&id).unwrap().clone();
        edited.buyers = 99.0;
        let previous = store.replace(&id, edited).unwrap();

        assert_eq!(previous.buyers, 10.0);
        let (first_id, first) = store.iter().next().unwrap();
        assert_eq!(first_id, &id);
        assert_eq!(first.buyers, 99.0);
    }

    #[test]
    fn test_replace_into_existing_key_is_refused() {
        let mut store = sequential_store();
        store.insert_accepted(&ingest(REPORT, "2024-06", "100", "c", &[]));

        let mut edited = store.get(&RecordId::from("rec-1")).unwrap().clone();
        edited.title = "B".to_string();
        let err = store.replace(&RecordId::from("rec-1"), edited).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_records_for_filters() {
        let mut store = sequential_store();
        store.insert_accepted(&ingest(REPORT, "2024-06", "100", "c", &[]));
        store.insert_accepted(&ingest("1 D x y 5", "2024-07", "200-300", "c", &[]));

        assert_eq!(store.records_for(Some("2024-06"), None).len(), 3);
        assert_eq!(store.records_for(None, Some("200-300")).len(), 1);
        assert_eq!(store.records_for(Some("2024-07"), Some("100")).len(), 0);
        assert_eq!(store.records_for(None, None).len(), 4);
    }

    #[test]
    fn test_filtered_yields_ids_in_order() {
        let mut store = sequential_store();
        store.insert_accepted(&ingest(REPORT, "2024-06", "100", "c", &[]));
        store.insert_accepted(&ingest("1 D x y 5", "2024-07", "100", "c", &[]));

        let ids: Vec<_> = store.filtered(None, Some("100")).map(|(id, _)| id.clone()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[3], RecordId::from("rec-4"));

        let july: Vec<_> = store.filtered(Some("2024-07"), None).collect();
        assert_eq!(july.len(), 1);
        assert_eq!(july[0].0, &RecordId::from("rec-4"));
        assert_eq!(july[0].1.title, "D");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
