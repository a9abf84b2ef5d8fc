use crate::trail::Trail;
use gatsguard_types::{MeasureProfile, Tristate};

/// Points added per unanswered necessity question.
const UNKNOWN_WEIGHT: u32 = 1;
/// Points added when the contribution to the objective is unclear.
const UNCLEAR_CONTRIBUTION_WEIGHT: u32 = 2;
/// Points added when less restrictive alternatives appear available.
const ALTERNATIVES_WEIGHT: u32 = 2;

/// Step 3: necessity / proportionality proxies.
///
/// Two independent sub-checks; both always run. Contribution clarity is
/// evaluated before alternatives availability, which fixes the trail order.
/// An unanswered question records a missing-info entry instead of a step.
pub fn run(profile: &MeasureProfile, trail: &mut Trail) {
    match profile.contribution_to_objective_clear {
        Tristate::Unknown => {
            trail.missing(
                "Necessity: Is the measure's contribution to the objective demonstrably clear?",
            );
            trail.add(UNKNOWN_WEIGHT);
        }
        Tristate::No => {
            trail.step(
                "Step 3 — Necessity: Contribution to objective appears unclear/weak (risk factor).",
            );
            trail.add(UNCLEAR_CONTRIBUTION_WEIGHT);
        }
        Tristate::Yes => {
            trail.step("Step 3 — Necessity: Contribution to objective appears plausibly supported.");
        }
    }

    match profile.less_trade_restrictive_alternatives_available {
        Tristate::Unknown => {
            trail.missing(
                "Necessity: Are reasonably available, less trade-restrictive alternatives present?",
            );
            trail.add(UNKNOWN_WEIGHT);
        }
        // Availability of a less restrictive alternative raises the risk that
        // the measure is not the minimally restrictive option.
        Tristate::Yes => {
            trail.step(
                "Step 3 — Necessity: Less trade-restrictive alternatives appear available (risk factor).",
            );
            trail.add(ALTERNATIVES_WEIGHT);
        }
        Tristate::No => {
            trail.step("Step 3 — Necessity: No clear less trade-restrictive alternatives indicated.");
        }
    }
}
