use gatsguard_types::{MeasureProfile, Tristate};

/// Profile with neither prima facie flag set.
pub fn quiet_profile() -> MeasureProfile {
    MeasureProfile {
        name: "labeling requirement".to_string(),
        affects_supply_modes: vec!["Mode 1".to_string()],
        ..MeasureProfile::default()
    }
}

/// Profile with both prima facie flags set and everything else absent.
pub fn concern_profile() -> MeasureProfile {
    MeasureProfile {
        name: "data localization mandate".to_string(),
        affects_supply_modes: vec!["Mode 1".to_string(), "Mode 3".to_string()],
        market_access_restriction: true,
        national_treatment_concern: true,
        ..MeasureProfile::default()
    }
}

/// `concern_profile` with every optional input answered.
pub fn answered_profile(
    objective: &str,
    contribution: Tristate,
    alternatives: Tristate,
    non_arbitrary: Tristate,
) -> MeasureProfile {
    MeasureProfile {
        legitimate_objective: Some(objective.to_string()),
        contribution_to_objective_clear: contribution,
        less_trade_restrictive_alternatives_available: alternatives,
        applied_non_arbitrarily: non_arbitrary,
        ..concern_profile()
    }
}
