//! Counterfactual scenario prediction.
//!
//! A [`ScenarioInput`] is a hand-authored feature row with no identifier
//! and no target. Prediction encodes it through the fitted model's own
//! scheme and applies the coefficients; no fitting happens here, so the
//! same model and input always produce the same number.

use crate::data::record::{AdminResponse, Severity};
use crate::error::PipelineError;
use crate::model::RiskModel;

/// One hypothetical scenario row.
///
/// `public_outrage` is expected in the same `0..=100` range as observed
/// rows; [`ScenarioInput::parse`] enforces that for text-sourced inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioInput {
    pub severity: Severity,
    pub response: AdminResponse,
    pub public_outrage: f64,
}

impl ScenarioInput {
    pub fn new(severity: Severity, response: AdminResponse, public_outrage: f64) -> Self {
        Self {
            severity,
            response,
            public_outrage,
        }
    }

    /// Build a scenario from text-level fields.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::UnknownLevel`] if either categorical value is
    ///   not a known level.
    /// - [`PipelineError::Value`] if `public_outrage` is not finite or is
    ///   outside `0..=100`.
    pub fn parse(
        severity: &str,
        response: &str,
        public_outrage: f64,
    ) -> Result<Self, PipelineError> {
        let severity = Severity::parse(severity).ok_or_else(|| PipelineError::UnknownLevel {
            field: Severity::FIELD,
            value: severity.to_string(),
        })?;
        let response =
            AdminResponse::parse(response).ok_or_else(|| PipelineError::UnknownLevel {
                field: AdminResponse::FIELD,
                value: response.to_string(),
            })?;
        if !public_outrage.is_finite() || !(0.0..=100.0).contains(&public_outrage) {
            return Err(PipelineError::Value {
                row: 0,
                column: "Public_Outrage",
                message: format!("{public_outrage} is out of range 0..=100"),
            });
        }
        Ok(Self::new(severity, response, public_outrage))
    }

    /// The three canonical counterfactuals: one per administration
    /// response, at severity High and outrage 80.
    pub fn canonical_set() -> Vec<ScenarioInput> {
        AdminResponse::LEVELS
            .iter()
            .map(|&response| ScenarioInput::new(Severity::High, response, 80.0))
            .collect()
    }
}

/// A scenario with its predicted political risk score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioPrediction {
    pub input: ScenarioInput,
    pub predicted_risk: f64,
}

/// Apply a fitted model to each scenario.
///
/// # Errors
///
/// [`PipelineError::UnknownLevel`] if a scenario carries a level outside
/// the model's encoding scheme.
pub fn predict_scenarios(
    model: &RiskModel,
    inputs: &[ScenarioInput],
) -> Result<Vec<ScenarioPrediction>, PipelineError> {
    inputs
        .iter()
        .map(|&input| {
            let row = model
                .scheme()
                .encode(input.severity, input.response, input.public_outrage)?;
            Ok(ScenarioPrediction {
                input,
                predicted_risk: model.predict_encoded(&row),
            })
        })
        .collect()
}
