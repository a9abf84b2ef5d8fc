use gatsguard_types::{Assessment, Outcome, RiskTier};

/// Full engine output: the assessment plus how it got there.
///
/// `assessment` is the stable interface value; `outcome` and `score` expose
/// the terminal state and the raw score for reporting and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentReport {
    pub outcome: Outcome,
    pub score: u32,
    pub assessment: Assessment,
}

impl AssessmentReport {
    pub fn risk(&self) -> RiskTier {
        self.assessment.risk
    }

    pub fn into_assessment(self) -> Assessment {
        self.assessment
    }
}
