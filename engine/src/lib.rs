// Core of the market planner: the pasted-report ingest parser, the launch projection
// calculator, and the small in-memory collections the surrounding application owns.

pub mod config;
pub mod data;
pub mod error;
pub mod projection;

pub use data::ingest_parser::{ingest, IngestParser};
pub use error::EngineError;
pub use projection::projector::project;
