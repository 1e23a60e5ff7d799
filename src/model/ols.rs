//! Ordinary least-squares fitting.
//!
//! The design matrix is the encoded feature matrix with a leading column
//! of ones for the intercept. The solve goes through SVD rather than the
//! raw normal equations, which keeps small indicator-heavy systems stable
//! and makes rank deficiency detectable before any coefficients are
//! produced.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

use crate::encoding::EncodingScheme;
use crate::error::PipelineError;
use crate::model::RiskModel;

/// Singular values below this threshold count as zero for both the rank
/// check and the solve.
pub const SVD_TOLERANCE: f64 = 1e-10;

/// Fit an OLS model on encoded training rows.
///
/// `features` must have one column per scheme column; `targets` one entry
/// per row. The returned model owns `scheme` and is immutable.
///
/// # Errors
///
/// - [`PipelineError::EmptySet`] if there are zero training rows.
/// - [`PipelineError::SingularMatrix`] if the design matrix is
///   rank-deficient, e.g. a categorical level with no training rows
///   left an all-zero indicator column, or there are fewer rows than
///   columns.
///
/// # Panics
///
/// Panics if the feature/target/scheme dimensions disagree; callers build
/// all three from the same dataset and scheme.
pub fn fit(
    scheme: EncodingScheme,
    features: &Array2<f64>,
    targets: &Array1<f64>,
) -> Result<RiskModel, PipelineError> {
    let n_rows = features.nrows();
    if n_rows == 0 {
        return Err(PipelineError::EmptySet {
            what: "training set",
        });
    }
    assert_eq!(
        features.ncols(),
        scheme.n_columns(),
        "feature matrix has {} columns, scheme expects {}",
        features.ncols(),
        scheme.n_columns()
    );
    assert_eq!(
        targets.len(),
        n_rows,
        "target count {} doesn't match row count {}",
        targets.len(),
        n_rows
    );

    let n_cols = features.ncols() + 1;
    let mut design = DMatrix::<f64>::zeros(n_rows, n_cols);
    for i in 0..n_rows {
        design[(i, 0)] = 1.0;
        for j in 0..features.ncols() {
            design[(i, j + 1)] = features[[i, j]];
        }
    }
    let y = DVector::from_iterator(n_rows, targets.iter().copied());

    let svd = design.svd(true, true);
    let rank = svd.rank(SVD_TOLERANCE);
    if rank < n_cols {
        return Err(PipelineError::SingularMatrix { rank, cols: n_cols });
    }

    let beta = svd
        .solve(&y, SVD_TOLERANCE)
        .expect("svd computed with singular vectors");
    let intercept = beta[0];
    let coefficients = beta.iter().skip(1).copied().collect();

    Ok(RiskModel::from_parts(intercept, coefficients, scheme))
}
