//! Scenario records and their categorical fields.
//!
//! The two nominal columns are closed enums validated at load time, so the
//! rest of the pipeline never sees a free-form level string. Declaration
//! order is the canonical level order; the first level of each field is the
//! reference category dropped during dummy encoding.

use chrono::NaiveDate;

/// Breach severity. Canonical order: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Column name in the input file and in error messages.
    pub const FIELD: &'static str = "Severity";

    /// All levels in canonical order. Index 0 is the reference category.
    pub const LEVELS: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Strict parse: exact match against the canonical spelling, no case
    /// folding. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Severity::Low),
            "Medium" => Some(Severity::Medium),
            "High" => Some(Severity::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administration response to the breach. Canonical order:
/// `Denial < Investigation < Accountability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminResponse {
    Denial,
    Investigation,
    Accountability,
}

impl AdminResponse {
    /// Column name in the input file and in error messages.
    pub const FIELD: &'static str = "Administration_Response";

    /// All levels in canonical order. Index 0 is the reference category.
    pub const LEVELS: [AdminResponse; 3] = [
        AdminResponse::Denial,
        AdminResponse::Investigation,
        AdminResponse::Accountability,
    ];

    /// Strict parse: exact match against the canonical spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Denial" => Some(AdminResponse::Denial),
            "Investigation" => Some(AdminResponse::Investigation),
            "Accountability" => Some(AdminResponse::Accountability),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminResponse::Denial => "Denial",
            AdminResponse::Investigation => "Investigation",
            AdminResponse::Accountability => "Accountability",
        }
    }
}

impl std::fmt::Display for AdminResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated scenario row.
///
/// Invariants (enforced by the loader, assumed everywhere else):
/// `scenario_id` is unique across the dataset; `public_outrage`,
/// `political_risk_score`, `allied_trust_index`, and
/// `adversary_escalation_risk` lie in `0..=100`;
/// `operational_delay_months` is finite and `>= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRecord {
    pub scenario_id: u32,
    pub date: NaiveDate,
    pub severity: Severity,
    pub response: AdminResponse,
    pub public_outrage: f64,
    /// Regression target.
    pub political_risk_score: f64,
    pub operational_delay_months: f64,
    pub allied_trust_index: f64,
    pub adversary_escalation_risk: f64,
}
