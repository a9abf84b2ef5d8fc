use crate::trail::Trail;
use gatsguard_types::{MeasureProfile, Tristate};

/// Points added when the application question is unanswered.
const UNKNOWN_WEIGHT: u32 = 1;
/// Points added for apparently arbitrary/discriminatory application.
/// Heaviest single factor in the sequence.
const ARBITRARY_WEIGHT: u32 = 3;

/// Step 4: chapeau-style non-arbitrary-application check.
pub fn run(profile: &MeasureProfile, trail: &mut Trail) {
    match profile.applied_non_arbitrarily {
        Tristate::Unknown => {
            trail.missing(
                "Chapeau-style: Is the measure applied in a non-arbitrary / non-discriminatory manner?",
            );
            trail.add(UNKNOWN_WEIGHT);
        }
        Tristate::No => {
            trail.step(
                "Step 4 — Chapeau-style: Application appears arbitrary/discriminatory (high risk factor).",
            );
            trail.add(ARBITRARY_WEIGHT);
        }
        Tristate::Yes => {
            trail.step("Step 4 — Chapeau-style: Application appears non-arbitrary/non-discriminatory.");
        }
    }
}
