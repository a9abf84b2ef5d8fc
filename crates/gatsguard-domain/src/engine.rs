use crate::checks;
use crate::report::AssessmentReport;
use crate::trail::Trail;
use gatsguard_types::{Assessment, MeasureProfile, Outcome, RiskTier};

/// Score at or above which the tier is `High`.
const HIGH_THRESHOLD: u32 = 6;
/// Score at or above which the tier is `Medium`.
const MEDIUM_THRESHOLD: u32 = 3;

/// Run the four-checkpoint sequence and return the full report.
///
/// The sequence is a short linear state machine with two early exits:
///
/// 1. prima facie: no concern flagged ends the run (`NotPrimaFacie`)
/// 2. legitimate objective: none stated ends the run (`NoObjective`)
/// 3. necessity / proportionality: both sub-checks always evaluated
/// 4. chapeau-style application check
///
/// Pure and deterministic: identical input yields identical output.
pub fn evaluate(profile: &MeasureProfile) -> AssessmentReport {
    let mut trail = Trail::new();

    if !checks::prima_facie::run(profile, &mut trail) {
        return finish(Outcome::NotPrimaFacie, trail);
    }

    if !checks::objective::run(profile, &mut trail) {
        return finish(Outcome::NoObjective, trail);
    }

    checks::necessity::run(profile, &mut trail);
    checks::chapeau::run(profile, &mut trail);

    finish(Outcome::FullyEvaluated, trail)
}

/// Run the sequence and return just the assessment value.
pub fn assess(profile: &MeasureProfile) -> Assessment {
    evaluate(profile).into_assessment()
}

fn finish(outcome: Outcome, trail: Trail) -> AssessmentReport {
    let (steps, missing_info, score) = trail.into_parts();
    AssessmentReport {
        outcome,
        score,
        assessment: Assessment {
            risk: risk_tier(score),
            steps,
            missing_info,
        },
    }
}

fn risk_tier(score: u32) -> RiskTier {
    if score >= HIGH_THRESHOLD {
        RiskTier::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
