//! Held-out evaluation metrics.
//!
//! Metrics implement [`MetricFn`] so the evaluator can run any set of them
//! over the same predictions. RMSE is the headline number; MAE ships as a
//! secondary check on outlier sensitivity.

use ndarray::ArrayView1;

use crate::data::dataset::Dataset;
use crate::error::PipelineError;
use crate::model::RiskModel;

// ===== Metric trait =====

/// A scalar metric over aligned prediction/actual vectors.
pub trait MetricFn {
    /// Compute the metric.
    ///
    /// # Panics
    ///
    /// Panics if the vectors are empty or their lengths differ; the
    /// evaluator guards both before calling.
    fn compute(&self, predictions: ArrayView1<f64>, actuals: ArrayView1<f64>) -> f64;

    /// Whether larger values indicate a better model.
    fn higher_is_better(&self) -> bool;

    /// Short lowercase name for reports.
    fn name(&self) -> &'static str;
}

/// Root-mean-squared-error: `sqrt(mean((prediction - actual)^2))`.
///
/// Always >= 0, and exactly 0 only when every prediction matches its
/// actual value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse;

impl MetricFn for Rmse {
    fn compute(&self, predictions: ArrayView1<f64>, actuals: ArrayView1<f64>) -> f64 {
        check_lengths(&predictions, &actuals);
        let sum_sq: f64 = predictions
            .iter()
            .zip(actuals.iter())
            .map(|(p, a)| (p - a) * (p - a))
            .sum();
        (sum_sq / predictions.len() as f64).sqrt()
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "rmse"
    }
}

/// Mean absolute error: `mean(|prediction - actual|)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl MetricFn for Mae {
    fn compute(&self, predictions: ArrayView1<f64>, actuals: ArrayView1<f64>) -> f64 {
        check_lengths(&predictions, &actuals);
        let sum_abs: f64 = predictions
            .iter()
            .zip(actuals.iter())
            .map(|(p, a)| (p - a).abs())
            .sum();
        sum_abs / predictions.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mae"
    }
}

fn check_lengths(predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) {
    assert!(!predictions.is_empty(), "metric over an empty set is undefined");
    assert_eq!(
        predictions.len(),
        actuals.len(),
        "prediction count {} doesn't match actual count {}",
        predictions.len(),
        actuals.len()
    );
}

// ===== Evaluation =====

/// A named metric result.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    pub name: &'static str,
    pub value: f64,
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.6}", self.name, self.value)
    }
}

/// Predict over the given rows and compute every metric.
///
/// # Errors
///
/// - [`PipelineError::EmptySet`] if `indices` is empty.
/// - [`PipelineError::UnknownLevel`] if a row cannot be encoded under the
///   model's scheme.
pub fn evaluate(
    model: &RiskModel,
    dataset: &Dataset,
    indices: &[usize],
    metrics: &[&dyn MetricFn],
) -> Result<Vec<MetricValue>, PipelineError> {
    if indices.is_empty() {
        return Err(PipelineError::EmptySet { what: "test set" });
    }
    let features = dataset.design_matrix(model.scheme(), indices)?;
    let predictions = model.predict(&features);
    let actuals = dataset.targets(indices);

    Ok(metrics
        .iter()
        .map(|metric| MetricValue {
            name: metric.name(),
            value: metric.compute(predictions.view(), actuals.view()),
        })
        .collect())
}
