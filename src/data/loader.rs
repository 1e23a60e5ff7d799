//! CSV ingestion for scenario tables.
//!
//! The loader reads the file exactly once: header validation first, then a
//! raw deserialization pass, then per-cell domain validation into
//! [`ScenarioRecord`]s. Any failure rejects the whole dataset; there is no
//! row dropping. Row numbers in errors are 1-based data-row positions
//! (the header is row 0).

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::data::dataset::Dataset;
use crate::data::record::{AdminResponse, ScenarioRecord, Severity};
use crate::error::PipelineError;

/// Column names required in the input header, in canonical file order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Scenario_ID",
    "Date",
    "Severity",
    "Administration_Response",
    "Public_Outrage",
    "Political_Risk_Score",
    "Operational_Delay_Months",
    "Allied_Trust_Index",
    "Adversary_Escalation_Risk",
];

/// One row as it appears in the file, before validation. Every field stays
/// a string so parse failures surface as [`PipelineError::Value`] with the
/// exact row and column instead of an opaque deserializer error.
#[derive(Debug, Clone, Deserialize)]
struct RawScenarioRow {
    #[serde(rename = "Scenario_ID")]
    scenario_id: String,

    #[serde(rename = "Date")]
    date: String,

    #[serde(rename = "Severity")]
    severity: String,

    #[serde(rename = "Administration_Response")]
    response: String,

    #[serde(rename = "Public_Outrage")]
    public_outrage: String,

    #[serde(rename = "Political_Risk_Score")]
    political_risk_score: String,

    #[serde(rename = "Operational_Delay_Months")]
    operational_delay_months: String,

    #[serde(rename = "Allied_Trust_Index")]
    allied_trust_index: String,

    #[serde(rename = "Adversary_Escalation_Risk")]
    adversary_escalation_risk: String,
}

/// Load and validate a scenario table.
///
/// # Errors
///
/// - [`PipelineError::Io`] if the file cannot be opened or read.
/// - [`PipelineError::Schema`] if a required column is missing.
/// - [`PipelineError::Value`] for the first malformed or out-of-range
///   cell, or a duplicate `Scenario_ID`.
/// - [`PipelineError::EmptySet`] if the file has a header but no rows.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, PipelineError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| io_error(path, e))?;

    let headers = reader.headers().map_err(|e| io_error(path, e))?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PipelineError::Schema { column });
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawScenarioRow>().enumerate() {
        let row = i + 1;
        // Structural failures (ragged rows, bad UTF-8). The csv error text
        // already names the record and field, so the column slot holds a
        // placeholder.
        let raw = result.map_err(|e| PipelineError::Value {
            row,
            column: "*",
            message: e.to_string(),
        })?;
        records.push(validate_row(raw, row)?);
    }

    Dataset::new(records)
}

fn io_error(path: &Path, e: csv::Error) -> PipelineError {
    let source = match e.into_kind() {
        csv::ErrorKind::Io(io_err) => io_err,
        other => io::Error::new(io::ErrorKind::InvalidData, format!("{other:?}")),
    };
    PipelineError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn validate_row(raw: RawScenarioRow, row: usize) -> Result<ScenarioRecord, PipelineError> {
    let scenario_id =
        raw.scenario_id
            .parse::<u32>()
            .map_err(|_| PipelineError::Value {
                row,
                column: "Scenario_ID",
                message: format!("invalid identifier '{}'", raw.scenario_id),
            })?;

    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d").map_err(|_| {
        PipelineError::Value {
            row,
            column: "Date",
            message: format!("invalid date '{}', expected YYYY-MM-DD", raw.date),
        }
    })?;

    let severity = Severity::parse(&raw.severity).ok_or_else(|| PipelineError::Value {
        row,
        column: Severity::FIELD,
        message: format!("'{}' is not one of Low|Medium|High", raw.severity),
    })?;

    let response = AdminResponse::parse(&raw.response).ok_or_else(|| PipelineError::Value {
        row,
        column: AdminResponse::FIELD,
        message: format!(
            "'{}' is not one of Denial|Investigation|Accountability",
            raw.response
        ),
    })?;

    let public_outrage = parse_bounded(&raw.public_outrage, row, "Public_Outrage", 0.0, 100.0)?;
    let political_risk_score =
        parse_bounded(&raw.political_risk_score, row, "Political_Risk_Score", 0.0, 100.0)?;
    let operational_delay_months =
        parse_non_negative(&raw.operational_delay_months, row, "Operational_Delay_Months")?;
    let allied_trust_index =
        parse_bounded(&raw.allied_trust_index, row, "Allied_Trust_Index", 0.0, 100.0)?;
    let adversary_escalation_risk = parse_bounded(
        &raw.adversary_escalation_risk,
        row,
        "Adversary_Escalation_Risk",
        0.0,
        100.0,
    )?;

    Ok(ScenarioRecord {
        scenario_id,
        date,
        severity,
        response,
        public_outrage,
        political_risk_score,
        operational_delay_months,
        allied_trust_index,
        adversary_escalation_risk,
    })
}

fn parse_numeric(raw: &str, row: usize, column: &'static str) -> Result<f64, PipelineError> {
    let value = raw.parse::<f64>().map_err(|_| PipelineError::Value {
        row,
        column,
        message: format!("invalid number '{raw}'"),
    })?;
    if !value.is_finite() {
        return Err(PipelineError::Value {
            row,
            column,
            message: format!("non-finite value '{raw}'"),
        });
    }
    Ok(value)
}

fn parse_bounded(
    raw: &str,
    row: usize,
    column: &'static str,
    lo: f64,
    hi: f64,
) -> Result<f64, PipelineError> {
    let value = parse_numeric(raw, row, column)?;
    if value < lo || value > hi {
        return Err(PipelineError::Value {
            row,
            column,
            message: format!("{value} is out of range {lo}..={hi}"),
        });
    }
    Ok(value)
}

fn parse_non_negative(
    raw: &str,
    row: usize,
    column: &'static str,
) -> Result<f64, PipelineError> {
    let value = parse_numeric(raw, row, column)?;
    if value < 0.0 {
        return Err(PipelineError::Value {
            row,
            column,
            message: format!("{value} must be >= 0"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Scenario_ID,Date,Severity,Administration_Response,Public_Outrage,\
Political_Risk_Score,Operational_Delay_Months,Allied_Trust_Index,Adversary_Escalation_Risk";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_valid_rows() {
        let file = write_csv(&[
            "1,2024-01-10,Low,Denial,35.5,42.0,2.0,71.0,30.0",
            "2,2024-02-20,High,Accountability,88.0,61.5,9.5,44.0,76.0",
        ]);
        let dataset = load_dataset(file.path()).unwrap();

        assert_eq!(dataset.n_rows(), 2);
        let first = dataset.record(0);
        assert_eq!(first.scenario_id, 1);
        assert_eq!(first.severity, Severity::Low);
        assert_eq!(first.response, AdminResponse::Denial);
        assert_eq!(first.public_outrage, 35.5);
        let second = dataset.record(1);
        assert_eq!(second.date.to_string(), "2024-02-20");
        assert_eq!(second.political_risk_score, 61.5);
    }

    #[test]
    fn missing_target_column_is_a_schema_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Scenario_ID,Date,Severity,Administration_Response,Public_Outrage,\
Operational_Delay_Months,Allied_Trust_Index,Adversary_Escalation_Risk"
        )
        .unwrap();
        writeln!(file, "1,2024-01-10,Low,Denial,35.5,2.0,71.0,30.0").unwrap();
        file.flush().unwrap();

        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Schema {
                column: "Political_Risk_Score"
            }
        ));
    }

    #[test]
    fn unknown_severity_value_rejects_the_dataset() {
        let file = write_csv(&[
            "1,2024-01-10,Low,Denial,35.5,42.0,2.0,71.0,30.0",
            "2,2024-02-20,Catastrophic,Denial,88.0,61.5,9.5,44.0,76.0",
        ]);
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            PipelineError::Value { row, column, message } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Severity");
                assert!(message.contains("Catastrophic"));
            }
            other => panic!("expected Value error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_outrage_rejects_the_dataset() {
        let file = write_csv(&["1,2024-01-10,Low,Denial,120.0,42.0,2.0,71.0,30.0"]);
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            PipelineError::Value { row, column, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Public_Outrage");
            }
            other => panic!("expected Value error, got {other:?}"),
        }
    }

    #[test]
    fn negative_delay_rejects_the_dataset() {
        let file = write_csv(&["1,2024-01-10,Low,Denial,35.0,42.0,-1.5,71.0,30.0"]);
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            PipelineError::Value { column, .. } => {
                assert_eq!(column, "Operational_Delay_Months");
            }
            other => panic!("expected Value error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_rejects_the_dataset() {
        let file = write_csv(&["1,10/01/2024,Low,Denial,35.0,42.0,2.0,71.0,30.0"]);
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            PipelineError::Value { column, message, .. } => {
                assert_eq!(column, "Date");
                assert!(message.contains("YYYY-MM-DD"));
            }
            other => panic!("expected Value error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_identifier_rejects_the_dataset() {
        let file = write_csv(&[
            "7,2024-01-10,Low,Denial,35.5,42.0,2.0,71.0,30.0",
            "7,2024-02-20,High,Accountability,88.0,61.5,9.5,44.0,76.0",
        ]);
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            PipelineError::Value { row, column, message } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Scenario_ID");
                assert!(message.contains('7'));
            }
            other => panic!("expected Value error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv(&[]);
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::EmptySet { what: "dataset" }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_dataset("/nonexistent/breach_scenarios.csv").unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
