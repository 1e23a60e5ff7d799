//! Deterministic train/test splitting.
//!
//! The split is uniform random without replacement, driven entirely by an
//! explicit seed: same seed + same row count = same partition, which keeps
//! every downstream metric reproducible. No stratification.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::PipelineError;

/// Splitting parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitParams {
    /// Fraction of rows assigned to training, strictly inside (0, 1).
    pub train_fraction: f64,
    /// Seed for the shuffle. All randomness in the pipeline flows from
    /// here; there is no process-wide random state.
    pub seed: u64,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            train_fraction: 0.8,
            seed: 42,
        }
    }
}

impl SplitParams {
    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(PipelineError::Value {
                row: 0,
                column: "train_fraction",
                message: format!(
                    "{} is outside the open interval (0, 1)",
                    self.train_fraction
                ),
            });
        }
        Ok(())
    }
}

/// Disjoint, exhaustive partition of row indices into train and test.
///
/// Holds only indices into the dataset, never row copies. Both sides are
/// sorted ascending so iteration order is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    train: Vec<usize>,
    test: Vec<usize>,
}

impl Split {
    #[inline]
    pub fn train(&self) -> &[usize] {
        &self.train
    }

    #[inline]
    pub fn test(&self) -> &[usize] {
        &self.test
    }

    #[inline]
    pub fn n_train(&self) -> usize {
        self.train.len()
    }

    #[inline]
    pub fn n_test(&self) -> usize {
        self.test.len()
    }
}

/// Partition `0..n_rows` into train and test index sets.
///
/// Shuffles the index range with a seeded Fisher-Yates pass, cuts at
/// `round(n_rows * train_fraction)`, and sorts both sides.
///
/// # Errors
///
/// - [`PipelineError::Value`] if `params` fail validation.
/// - [`PipelineError::EmptySet`] if `n_rows` is zero or the cut leaves
///   either side empty.
pub fn split_indices(n_rows: usize, params: &SplitParams) -> Result<Split, PipelineError> {
    params.validate()?;
    if n_rows == 0 {
        return Err(PipelineError::EmptySet { what: "dataset" });
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(params.seed);
    let mut indices: Vec<usize> = (0..n_rows).collect();
    for i in 0..n_rows.saturating_sub(1) {
        let j = rng.gen_range(i..n_rows);
        indices.swap(i, j);
    }

    let n_train = ((n_rows as f64) * params.train_fraction).round() as usize;
    if n_train == 0 {
        return Err(PipelineError::EmptySet {
            what: "training split",
        });
    }
    if n_train >= n_rows {
        return Err(PipelineError::EmptySet { what: "test split" });
    }

    let mut train = indices[..n_train].to_vec();
    let mut test = indices[n_train..].to_vec();
    train.sort_unstable();
    test.sort_unstable();

    Ok(Split { train, test })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_identical_partition() {
        let params = SplitParams {
            train_fraction: 0.8,
            seed: 1337,
        };
        let a = split_indices(100, &params).unwrap();
        let b = split_indices(100, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_partitions() {
        let a = split_indices(
            100,
            &SplitParams {
                train_fraction: 0.8,
                seed: 1,
            },
        )
        .unwrap();
        let b = split_indices(
            100,
            &SplitParams {
                train_fraction: 0.8,
                seed: 2,
            },
        )
        .unwrap();
        assert_ne!(a.train(), b.train());
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        let split = split_indices(97, &SplitParams::default()).unwrap();

        let mut all: Vec<usize> = split.train().to_vec();
        all.extend_from_slice(split.test());
        all.sort_unstable();
        let expected: Vec<usize> = (0..97).collect();
        // Equality after sorting implies no overlap and full coverage.
        assert_eq!(all, expected);
    }

    #[test]
    fn cut_point_rounds_the_fraction() {
        let split = split_indices(
            100,
            &SplitParams {
                train_fraction: 0.8,
                seed: 42,
            },
        )
        .unwrap();
        assert_eq!(split.n_train(), 80);
        assert_eq!(split.n_test(), 20);
    }

    #[test]
    fn sides_are_sorted() {
        let split = split_indices(50, &SplitParams::default()).unwrap();
        assert!(split.train().windows(2).all(|w| w[0] < w[1]));
        assert!(split.test().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn fraction_outside_unit_interval_is_rejected() {
        for fraction in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let err = split_indices(
                10,
                &SplitParams {
                    train_fraction: fraction,
                    seed: 42,
                },
            )
            .unwrap_err();
            assert!(matches!(
                err,
                PipelineError::Value {
                    column: "train_fraction",
                    ..
                }
            ));
        }
    }

    #[test]
    fn degenerate_cut_is_an_empty_set_error() {
        // round(5 * 0.9) = 5 leaves no test rows.
        let err = split_indices(
            5,
            &SplitParams {
                train_fraction: 0.9,
                seed: 42,
            },
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::EmptySet { what: "test split" }));

        // round(5 * 0.05) = 0 leaves no training rows.
        let err = split_indices(
            5,
            &SplitParams {
                train_fraction: 0.05,
                seed: 42,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::EmptySet {
                what: "training split"
            }
        ));
    }

    #[test]
    fn zero_rows_is_an_empty_set_error() {
        let err = split_indices(0, &SplitParams::default()).unwrap_err();
        assert!(matches!(err, PipelineError::EmptySet { what: "dataset" }));
    }
}
