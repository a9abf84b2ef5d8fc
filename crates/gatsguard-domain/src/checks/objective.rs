use crate::trail::Trail;
use gatsguard_types::MeasureProfile;

/// Points added when no objective was provided.
const MISSING_WEIGHT: u32 = 3;
/// Points added when an objective was stated (still a step further to argue).
const STATED_WEIGHT: u32 = 1;

/// Step 2: Art. XIV legitimate-objective check.
///
/// Returns `true` when an objective was stated. `false` means the engine
/// stops here: without an objective the justification analysis cannot be
/// structured, so necessity and chapeau never run.
pub fn run(profile: &MeasureProfile, trail: &mut Trail) -> bool {
    match profile.stated_objective() {
        None => {
            trail.missing(
                "Art. XIV: Specify the legitimate objective (e.g., privacy, security, innovation).",
            );
            trail.step(
                "Step 2 — Art. XIV: Legitimate objective not provided; cannot structure justification.",
            );
            trail.add(MISSING_WEIGHT);
            false
        }
        Some(objective) => {
            trail.step(format!(
                "Step 2 — Art. XIV: Legitimate objective stated as '{objective}'."
            ));
            trail.add(STATED_WEIGHT);
            true
        }
    }
}
