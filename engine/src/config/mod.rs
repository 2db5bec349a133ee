pub mod settings;

pub use settings::{ColumnSplit, EngineSettings};
