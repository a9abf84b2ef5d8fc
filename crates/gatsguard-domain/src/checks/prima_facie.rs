use crate::trail::Trail;
use gatsguard_types::MeasureProfile;

/// Points added per flagged prima facie concern.
const CONCERN_WEIGHT: u32 = 2;

/// Step 1: Art. XVI / XVII prima facie screening.
///
/// Returns `true` when at least one concern flag is set. `false` means the
/// engine stops here; the "no concern" step has already been recorded.
pub fn run(profile: &MeasureProfile, trail: &mut Trail) -> bool {
    let mut prima_facie = false;

    if profile.market_access_restriction {
        prima_facie = true;
        trail.step("Step 1 — Prima facie: Potential concern under GATS Art. XVI (market access).");
        trail.add(CONCERN_WEIGHT);
    }

    if profile.national_treatment_concern {
        prima_facie = true;
        trail.step(
            "Step 1 — Prima facie: Potential concern under GATS Art. XVII (national treatment).",
        );
        trail.add(CONCERN_WEIGHT);
    }

    if !prima_facie {
        trail.step("Step 1 — Prima facie: No indicated Art. XVI / XVII concerns on provided inputs.");
    }

    prima_facie
}
