//! In-memory dataset container.
//!
//! A [`Dataset`] is an ordered, immutable sequence of validated
//! [`ScenarioRecord`]s, loaded once per run. Downstream stages address rows
//! by index (the splitter hands out index sets, never row copies) and pull
//! numeric views out of the dataset when they need matrix form.

use ndarray::{Array1, Array2};

use crate::data::record::ScenarioRecord;
use crate::encoding::EncodingScheme;
use crate::error::PipelineError;

/// Ordered, immutable collection of scenario rows.
///
/// Construction enforces the cross-row invariants: at least one row, and
/// unique `scenario_id`s. Per-cell domain validation happens in the loader
/// before records exist.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ScenarioRecord>,
}

impl Dataset {
    /// Build a dataset from validated records.
    ///
    /// # Errors
    ///
    /// [`PipelineError::EmptySet`] if `records` is empty, and
    /// [`PipelineError::Value`] if two rows share a `scenario_id`. Row
    /// numbers in errors are 1-based data-row positions.
    pub fn new(records: Vec<ScenarioRecord>) -> Result<Self, PipelineError> {
        if records.is_empty() {
            return Err(PipelineError::EmptySet { what: "dataset" });
        }
        let mut seen = std::collections::HashSet::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if !seen.insert(record.scenario_id) {
                return Err(PipelineError::Value {
                    row: i + 1,
                    column: "Scenario_ID",
                    message: format!("duplicate identifier {}", record.scenario_id),
                });
            }
        }
        Ok(Self { records })
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    #[inline]
    pub fn record(&self, index: usize) -> &ScenarioRecord {
        &self.records[index]
    }

    /// Regression targets (`political_risk_score`) for the given rows.
    pub fn targets(&self, indices: &[usize]) -> Array1<f64> {
        indices
            .iter()
            .map(|&i| self.records[i].political_risk_score)
            .collect()
    }

    /// Encoded feature matrix for the given rows, one row per index, with
    /// the scheme's fixed column order. No intercept column; the fitter
    /// prepends that itself.
    ///
    /// # Errors
    ///
    /// [`PipelineError::UnknownLevel`] if a row carries a level the scheme
    /// does not know (possible when the scheme was built over a subset of
    /// the canonical levels).
    pub fn design_matrix(
        &self,
        scheme: &EncodingScheme,
        indices: &[usize],
    ) -> Result<Array2<f64>, PipelineError> {
        let n_cols = scheme.n_columns();
        let mut flat = Vec::with_capacity(indices.len() * n_cols);
        for &i in indices {
            flat.extend(scheme.encode_record(&self.records[i])?);
        }
        let matrix = Array2::from_shape_vec((indices.len(), n_cols), flat)
            .expect("row encoding length matches scheme column count");
        Ok(matrix)
    }
}
