//! Shared helpers for integration tests.
//!
//! Generates scenario tables whose target is linear in the encoded
//! features with a small uniform noise term, so fitted coefficients land
//! near the generating values and the canonical response ordering
//! (Denial above Investigation above Accountability) always holds.

use std::io::Write;

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tempfile::NamedTempFile;

use riskcast::{AdminResponse, Severity};

pub const HEADER: &str = "Scenario_ID,Date,Severity,Administration_Response,Public_Outrage,\
Political_Risk_Score,Operational_Delay_Months,Allied_Trust_Index,Adversary_Escalation_Risk";

/// Generating parameters, exposed so tests can assert recovered
/// coefficients against them.
pub const GEN_INTERCEPT: f64 = 16.0;
pub const GEN_SEVERITY: [f64; 3] = [0.0, 10.0, 22.0];
pub const GEN_RESPONSE: [f64; 3] = [0.0, -9.0, -18.0];
pub const GEN_OUTRAGE: f64 = 0.45;

/// Noise half-width; small enough that the response ordering survives any
/// train subset.
const NOISE: f64 = 2.0;

/// Balanced table over all severities. Level counts differ by at most one
/// per field, so no default split can leave a level without training rows.
pub fn write_scenario_csv(n_rows: usize, seed: u64) -> NamedTempFile {
    write_csv_with_severities(n_rows, seed, &Severity::LEVELS)
}

/// Same generator restricted to a subset of severities; the remaining
/// levels never appear in the file.
pub fn write_csv_with_severities(
    n_rows: usize,
    seed: u64,
    severities: &[Severity],
) -> NamedTempFile {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for i in 0..n_rows {
        let severity = severities[i % severities.len()];
        let response = AdminResponse::LEVELS[(i / 3) % 3];
        let sev_idx = Severity::LEVELS.iter().position(|&s| s == severity).unwrap();
        let resp_idx = AdminResponse::LEVELS
            .iter()
            .position(|&r| r == response)
            .unwrap();

        let outrage = 15.0 + ((i * 13) % 71) as f64;
        let risk = GEN_INTERCEPT
            + GEN_SEVERITY[sev_idx]
            + GEN_RESPONSE[resp_idx]
            + GEN_OUTRAGE * outrage
            + rng.gen_range(-NOISE..NOISE);

        let date = start + Days::new(i as u64);
        writeln!(
            file,
            "{},{},{},{},{:.1},{:.3},{:.1},{:.1},{:.1}",
            i + 1,
            date,
            severity,
            response,
            outrage,
            risk,
            0.5 + (i % 8) as f64,
            40.0 + (i % 50) as f64,
            15.0 + (i % 70) as f64,
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}
