//! Error types for the scenario-modeling pipeline.
//!
//! Every stage reports failures through [`PipelineError`]. The pipeline is a
//! deterministic batch computation, so there are no retries: the first error
//! aborts the run and the message identifies the stage and the offending
//! row, column, or field.

use std::io;

/// Errors raised by the loading, encoding, splitting, fitting, and
/// prediction stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A required column is missing from the input header.
    #[error("schema error: required column '{column}' is missing from the header")]
    Schema { column: &'static str },

    /// A cell failed to parse or violated its declared domain. The whole
    /// dataset is rejected rather than dropping the row, so reported
    /// metrics stay reproducible.
    #[error("value error at row {row}, column '{column}': {message}")]
    Value {
        row: usize,
        column: &'static str,
        message: String,
    },

    /// A categorical value outside the encoding scheme's known levels.
    #[error("unknown level for {field}: '{value}'")]
    UnknownLevel { field: &'static str, value: String },

    /// The design matrix is rank-deficient, e.g. a categorical level with
    /// zero training rows produced an all-zero indicator column.
    #[error("singular design matrix: rank {rank} < {cols} columns, cannot fit")]
    SingularMatrix { rank: usize, cols: usize },

    /// A stage received zero rows where the result would be undefined.
    #[error("empty {what}: need at least one row")]
    EmptySet { what: &'static str },

    /// The input file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_identify_the_offender() {
        let err = PipelineError::Schema {
            column: "Political_Risk_Score",
        };
        assert!(err.to_string().contains("Political_Risk_Score"));

        let err = PipelineError::Value {
            row: 17,
            column: "Public_Outrage",
            message: "120 is out of range 0..=100".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 17"));
        assert!(msg.contains("Public_Outrage"));

        let err = PipelineError::UnknownLevel {
            field: "Severity",
            value: "Catastrophic".into(),
        };
        assert!(err.to_string().contains("Catastrophic"));
    }

    #[test]
    fn singular_matrix_reports_rank() {
        let err = PipelineError::SingularMatrix { rank: 4, cols: 6 };
        let msg = err.to_string();
        assert!(msg.contains("rank 4"));
        assert!(msg.contains("6 columns"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PipelineError>();
    }
}
