//! Fitted linear risk model.
//!
//! # Key Types
//!
//! - [`RiskModel`]: coefficient vector + intercept + the encoding scheme
//!   that produced the design matrix. Immutable once fitted.
//! - [`ols::fit`] (re-exported as `fit`): least-squares fitting.

pub mod ols;

pub use ols::fit;

use ndarray::{Array1, Array2};

use crate::encoding::EncodingScheme;

/// Linear model mapping encoded scenario features to a political risk
/// score.
///
/// The model owns its [`EncodingScheme`], so every prediction path (test
/// rows and hand-authored scenarios alike) encodes through the exact
/// layout the coefficients were fitted against. It holds no reference to
/// the training data.
#[derive(Debug, Clone)]
pub struct RiskModel {
    intercept: f64,
    /// One coefficient per encoded column, in scheme order.
    coefficients: Vec<f64>,
    scheme: EncodingScheme,
}

impl RiskModel {
    /// Assemble a model from already-computed parts.
    ///
    /// # Panics
    ///
    /// Panics if `coefficients` length does not match the scheme's column
    /// count.
    pub fn from_parts(intercept: f64, coefficients: Vec<f64>, scheme: EncodingScheme) -> Self {
        assert_eq!(
            coefficients.len(),
            scheme.n_columns(),
            "coefficient count {} doesn't match scheme column count {}",
            coefficients.len(),
            scheme.n_columns()
        );
        Self {
            intercept,
            coefficients,
            scheme,
        }
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[inline]
    pub fn scheme(&self) -> &EncodingScheme {
        &self.scheme
    }

    /// Look up a coefficient by its encoded-column name.
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.scheme
            .column_names()
            .iter()
            .position(|n| n == name)
            .map(|i| self.coefficients[i])
    }

    /// Predict from an already-encoded row.
    ///
    /// # Panics
    ///
    /// Panics if `row` length does not match the coefficient count.
    pub fn predict_encoded(&self, row: &[f64]) -> f64 {
        assert_eq!(
            row.len(),
            self.coefficients.len(),
            "encoded row length {} doesn't match coefficient count {}",
            row.len(),
            self.coefficients.len()
        );
        let dot: f64 = row
            .iter()
            .zip(&self.coefficients)
            .map(|(x, c)| x * c)
            .sum();
        self.intercept + dot
    }

    /// Row-wise prediction over an encoded feature matrix.
    ///
    /// # Panics
    ///
    /// Panics if the column count does not match the coefficient count.
    pub fn predict(&self, features: &Array2<f64>) -> Array1<f64> {
        assert_eq!(
            features.ncols(),
            self.coefficients.len(),
            "feature matrix has {} columns, model expects {}",
            features.ncols(),
            self.coefficients.len()
        );
        features
            .rows()
            .into_iter()
            .map(|row| {
                let dot: f64 = row.iter().zip(&self.coefficients).map(|(x, c)| x * c).sum();
                self.intercept + dot
            })
            .collect()
    }

    /// `(name, value)` pairs for reporting: the intercept first, then one
    /// entry per encoded column in scheme order.
    pub fn coefficient_summary(&self) -> Vec<(String, f64)> {
        let mut summary = Vec::with_capacity(self.coefficients.len() + 1);
        summary.push(("Intercept".to_string(), self.intercept));
        summary.extend(
            self.scheme
                .column_names()
                .into_iter()
                .zip(self.coefficients.iter().copied()),
        );
        summary
    }
}
