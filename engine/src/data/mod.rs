// Pasted report ingestion and the record collections built from it.
pub mod catalog;
pub mod export;
pub mod ingest_parser;
pub mod record_store;
pub mod summary;
