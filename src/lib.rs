//! riskcast: breach-consequence scenario modeling.
//!
//! Loads a synthetic table of hypothetical security-breach scenarios, fits
//! an ordinary least-squares model predicting a political risk score from
//! breach severity, administration response, and public outrage, evaluates
//! it on a held-out split, and scores hand-authored counterfactual
//! scenarios.
//!
//! # Key Types
//!
//! - [`Dataset`] / [`ScenarioRecord`] - Validated input rows
//! - [`EncodingScheme`] - Reference-category dummy encoding
//! - [`SplitParams`] / [`Split`] - Seeded train/test partitioning
//! - [`RiskModel`] - Fitted coefficients + the scheme that produced them
//! - [`MetricFn`] / [`Rmse`] / [`Mae`] - Held-out evaluation
//! - [`ScenarioInput`] - Counterfactual rows for prediction
//!
//! # Running
//!
//! [`pipeline::run`] composes the stages; the `scenario_report` binary
//! wraps it with flag parsing and a printed report.

pub mod data;
pub mod encoding;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod scenario;
pub mod split;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Error taxonomy (every stage returns this)
pub use error::PipelineError;

// Data types
pub use data::{load_dataset, AdminResponse, Dataset, ScenarioRecord, Severity};

// Encoding and splitting
pub use encoding::EncodingScheme;
pub use split::{split_indices, Split, SplitParams};

// Model and evaluation
pub use metrics::{evaluate, Mae, MetricFn, MetricValue, Rmse};
pub use model::{fit, RiskModel};

// Scenario prediction
pub use scenario::{predict_scenarios, ScenarioInput, ScenarioPrediction};

// Pipeline composition and logging
pub use logger::{PipelineLogger, Verbosity};
pub use pipeline::{PipelineParams, PipelineReport};
