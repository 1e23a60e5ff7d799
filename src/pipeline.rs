//! End-to-end pipeline composition.
//!
//! One call runs load, encode, split, fit, and evaluate, then scores the
//! canonical counterfactual scenarios. Every stage hands an immutable
//! artifact to the next; the first failure aborts the run.

use std::path::PathBuf;

use crate::data::loader::load_dataset;
use crate::encoding::EncodingScheme;
use crate::error::PipelineError;
use crate::logger::{PipelineLogger, Verbosity};
use crate::metrics::{evaluate, Mae, MetricValue, Rmse};
use crate::model;
use crate::scenario::{predict_scenarios, ScenarioInput, ScenarioPrediction};
use crate::split::{split_indices, SplitParams};

/// Everything a run needs. All fields public, assembled by the caller.
#[derive(Debug, Clone)]
pub struct PipelineParams {
    pub data_path: PathBuf,
    pub split: SplitParams,
    pub verbosity: Verbosity,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/breach_scenarios.csv"),
            split: SplitParams::default(),
            verbosity: Verbosity::default(),
        }
    }
}

impl PipelineParams {
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.split.validate()
    }
}

/// Printable outcome of one run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub n_rows: usize,
    pub n_train: usize,
    pub n_test: usize,
    /// `(name, value)` pairs, intercept first.
    pub coefficients: Vec<(String, f64)>,
    pub metrics: Vec<MetricValue>,
    pub scenarios: Vec<ScenarioPrediction>,
}

/// Run the full pipeline.
///
/// # Errors
///
/// Any [`PipelineError`] from a stage: parameter validation, loading,
/// splitting, fitting, evaluation, or scenario prediction.
pub fn run(params: &PipelineParams) -> Result<PipelineReport, PipelineError> {
    params.validate()?;
    let logger = PipelineLogger::new(params.verbosity);

    let dataset = load_dataset(&params.data_path)?;
    logger.log_dataset(&params.data_path.display().to_string(), dataset.n_rows());

    let scheme = EncodingScheme::canonical();
    logger.debug(&format!("encoded columns: {:?}", scheme.column_names()));

    let split = split_indices(dataset.n_rows(), &params.split)?;
    logger.log_split(split.n_train(), split.n_test(), params.split.seed);
    if split.n_test() < 10 {
        logger.warn(&format!(
            "test set has only {} rows, held-out metrics will be noisy",
            split.n_test()
        ));
    }

    let features = dataset.design_matrix(&scheme, split.train())?;
    let targets = dataset.targets(split.train());
    let model = model::fit(scheme, &features, &targets)?;
    logger.log_fit(model.coefficients().len());

    let metrics = evaluate(&model, &dataset, split.test(), &[&Rmse, &Mae])?;
    for metric in &metrics {
        logger.log_metric(metric);
    }

    let scenarios = predict_scenarios(&model, &ScenarioInput::canonical_set())?;

    Ok(PipelineReport {
        n_rows: dataset.n_rows(),
        n_train: split.n_train(),
        n_test: split.n_test(),
        coefficients: model.coefficient_summary(),
        metrics,
        scenarios,
    })
}
