//! Dataset loading and representation.

pub mod dataset;
pub mod loader;
pub mod record;

pub use dataset::Dataset;
pub use loader::{load_dataset, REQUIRED_COLUMNS};
pub use record::{AdminResponse, ScenarioRecord, Severity};
