//! Reference-category dummy encoding for the categorical predictors.
//!
//! An [`EncodingScheme`] pins the exact mapping from levels to indicator
//! columns, so train rows, test rows, and hand-authored scenario rows all
//! encode identically. The first level of each field (in the order the
//! scheme was built with) is the dropped reference category; every other
//! level gets one binary column. The numeric `Public_Outrage` value is
//! appended last.
//!
//! # Key Types
//!
//! - [`EncodingScheme`]: owns the level lists and the fixed column order.

use crate::data::record::{AdminResponse, ScenarioRecord, Severity};
use crate::error::PipelineError;

/// Deterministic dummy-encoding scheme for severity, response, and outrage.
///
/// The scheme is built once and then applied unchanged to every row it
/// sees. Encoding is pure: the same inputs always produce the same vector,
/// and the column order never varies within a scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingScheme {
    severity_levels: Vec<Severity>,
    response_levels: Vec<AdminResponse>,
}

impl EncodingScheme {
    /// Scheme over the full canonical level sets: references are
    /// `Severity::Low` and `AdminResponse::Denial`.
    pub fn canonical() -> Self {
        Self {
            severity_levels: Severity::LEVELS.to_vec(),
            response_levels: AdminResponse::LEVELS.to_vec(),
        }
    }

    /// Scheme over explicit level lists. The first entry of each list is
    /// the reference category.
    ///
    /// # Panics
    ///
    /// Panics if either list is empty or contains duplicates.
    pub fn from_levels(severities: Vec<Severity>, responses: Vec<AdminResponse>) -> Self {
        assert!(!severities.is_empty(), "severity level list is empty");
        assert!(!responses.is_empty(), "response level list is empty");
        for (i, level) in severities.iter().enumerate() {
            assert!(
                !severities[..i].contains(level),
                "duplicate severity level {level}"
            );
        }
        for (i, level) in responses.iter().enumerate() {
            assert!(
                !responses[..i].contains(level),
                "duplicate response level {level}"
            );
        }
        Self {
            severity_levels: severities,
            response_levels: responses,
        }
    }

    /// Number of encoded columns: one indicator per non-reference level of
    /// each field, plus the outrage column.
    #[inline]
    pub fn n_columns(&self) -> usize {
        (self.severity_levels.len() - 1) + (self.response_levels.len() - 1) + 1
    }

    /// Column names in encoding order, for coefficient reporting.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.n_columns());
        for level in &self.severity_levels[1..] {
            names.push(format!("{}={level}", Severity::FIELD));
        }
        for level in &self.response_levels[1..] {
            names.push(format!("{}={level}", AdminResponse::FIELD));
        }
        names.push("Public_Outrage".to_string());
        names
    }

    /// Encode one (severity, response, outrage) triple into the scheme's
    /// fixed column order.
    ///
    /// # Errors
    ///
    /// [`PipelineError::UnknownLevel`] if a level is not part of this
    /// scheme.
    pub fn encode(
        &self,
        severity: Severity,
        response: AdminResponse,
        outrage: f64,
    ) -> Result<Vec<f64>, PipelineError> {
        let sev_pos = self
            .severity_levels
            .iter()
            .position(|&l| l == severity)
            .ok_or_else(|| PipelineError::UnknownLevel {
                field: Severity::FIELD,
                value: severity.as_str().to_string(),
            })?;
        let resp_pos = self
            .response_levels
            .iter()
            .position(|&l| l == response)
            .ok_or_else(|| PipelineError::UnknownLevel {
                field: AdminResponse::FIELD,
                value: response.as_str().to_string(),
            })?;

        let mut row = vec![0.0; self.n_columns()];
        // Position 0 is the reference level: all indicators stay zero.
        if sev_pos > 0 {
            row[sev_pos - 1] = 1.0;
        }
        if resp_pos > 0 {
            row[(self.severity_levels.len() - 1) + (resp_pos - 1)] = 1.0;
        }
        *row.last_mut().expect("scheme has at least the outrage column") = outrage;
        Ok(row)
    }

    /// Encode the model features of a full record.
    pub fn encode_record(&self, record: &ScenarioRecord) -> Result<Vec<f64>, PipelineError> {
        self.encode(record.severity, record.response, record.public_outrage)
    }
}
