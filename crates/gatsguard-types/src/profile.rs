use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Three-state answer to a necessity/chapeau question.
///
/// The wire form is an optional boolean: `true` is `Yes`, `false` is `No`, and
/// an absent field is `Unknown`. All three states are observable downstream, so
/// this is an explicit enum rather than a nullable bool: `Unknown` means "the
/// input has not been supplied yet", which scores and reports differently from
/// an explicit `No`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Tristate {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Tristate {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Tristate::Unknown)
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Tristate::Yes,
            Some(false) => Tristate::No,
            None => Tristate::Unknown,
        }
    }
}

impl From<Tristate> for Option<bool> {
    fn from(value: Tristate) -> Self {
        match value {
            Tristate::Yes => Some(true),
            Tristate::No => Some(false),
            Tristate::Unknown => None,
        }
    }
}

/// Structured description of one regulatory measure under GATS analysis.
///
/// This is a *user-facing* input model: it is intentionally permissive. No
/// field is validated beyond its shape; absent optional fields mean "not yet
/// supplied" and are first-class inputs to the engine, not errors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MeasureProfile {
    /// Label only; never interpreted by the engine.
    pub name: String,

    /// Supply modes the measure touches (e.g. "Mode 1", "Mode 3").
    /// Informational; not consumed by the scoring logic.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affects_supply_modes: Vec<String>,

    /// Proxy flag for a potential Art. XVI (market access) concern.
    #[serde(default)]
    pub market_access_restriction: bool,

    /// Proxy flag for a potential Art. XVII (national treatment) concern.
    #[serde(default)]
    pub national_treatment_concern: bool,

    /// Stated Art. XIV justification (e.g. "privacy", "security").
    /// Absence is meaningful: it routes the assessment to an early stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legitimate_objective: Option<String>,

    /// Does the measure demonstrably contribute to its stated objective?
    #[serde(default, skip_serializing_if = "Tristate::is_unknown")]
    #[schemars(with = "Option<bool>")]
    pub contribution_to_objective_clear: Tristate,

    /// Are reasonably available, less trade-restrictive alternatives present?
    #[serde(default, skip_serializing_if = "Tristate::is_unknown")]
    #[schemars(with = "Option<bool>")]
    pub less_trade_restrictive_alternatives_available: Tristate,

    /// Is the measure applied in a non-arbitrary / non-discriminatory manner?
    #[serde(default, skip_serializing_if = "Tristate::is_unknown")]
    #[schemars(with = "Option<bool>")]
    pub applied_non_arbitrarily: Tristate,
}

impl MeasureProfile {
    /// The stated objective, if one was actually provided.
    ///
    /// An empty string counts as "not provided", matching the absent case.
    pub fn stated_objective(&self) -> Option<&str> {
        self.legitimate_objective
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}
