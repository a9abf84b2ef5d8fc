use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;

/// Stable schema identifier for gatsguard reports.
pub const SCHEMA_REPORT_V1: &str = "gatsguard.report.v1";

/// Qualitative risk tier derived from the accumulated score.
///
/// The exact labels (`"Low"`, `"Medium"`, `"High"`) are contract text:
/// downstream consumers match on them. Ordering follows declaration order, so
/// `Low < Medium < High`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown risk tier: {0} (expected low, medium, or high)")]
pub struct ParseRiskTierError(pub String);

impl FromStr for RiskTier {
    type Err = ParseRiskTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "medium" => Ok(RiskTier::Medium),
            "high" => Ok(RiskTier::High),
            _ => Err(ParseRiskTierError(s.to_string())),
        }
    }
}

/// Terminal state of the checkpoint sequence.
///
/// The engine is a short linear state machine; which checkpoints actually ran
/// is an observable part of the result, not an implementation detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Stopped after step 1: no prima facie concern was flagged.
    NotPrimaFacie,
    /// Stopped after step 2: no legitimate objective was provided.
    NoObjective,
    /// All four checkpoints ran.
    FullyEvaluated,
}

/// The assessment proper: risk tier, explanation trail, unresolved inputs.
///
/// `steps` and `missing_info` are append-only during evaluation and carry
/// contract message strings; consumers may match on them verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    pub risk: RiskTier,
    pub steps: Vec<String>,
    pub missing_info: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Versioned report envelope written as the JSON artifact.
///
/// Keeps a stable outer shape (schema id, tool, timing) around the assessment
/// so the artifact can be re-rendered or diffed later without re-running.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GatsguardReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    /// `MeasureProfile::name` of the assessed measure.
    pub measure: String,
    pub outcome: Outcome,
    /// Accumulated numeric score the tier was derived from.
    pub score: u32,
    pub assessment: Assessment,
}
