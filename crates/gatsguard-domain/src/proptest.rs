//! Property-based tests for the assessment engine.
//!
//! These tests use proptest to verify invariants over the full profile space:
//! - totality and determinism
//! - step / missing-info counting laws for each terminal outcome
//! - score and tier consistency

use crate::engine::evaluate;
use gatsguard_types::{MeasureProfile, Outcome, RiskTier, Tristate};
// Leading `::` disambiguates the crate from this module's own name.
use ::proptest::prelude::*;

fn arb_tristate() -> impl Strategy<Value = Tristate> {
    prop_oneof![
        Just(Tristate::Yes),
        Just(Tristate::No),
        Just(Tristate::Unknown),
    ]
}

fn arb_objective() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z][a-z ]{0,23}".prop_map(Some),
    ]
}

fn arb_supply_modes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![Just("Mode 1"), Just("Mode 2"), Just("Mode 3")], 0..4)
        .prop_map(|modes| modes.into_iter().map(str::to_string).collect())
}

prop_compose! {
    fn arb_profile()(
        name in "[a-z][a-z ]{0,15}",
        affects_supply_modes in arb_supply_modes(),
        market_access_restriction in any::<bool>(),
        national_treatment_concern in any::<bool>(),
        legitimate_objective in arb_objective(),
        contribution_to_objective_clear in arb_tristate(),
        less_trade_restrictive_alternatives_available in arb_tristate(),
        applied_non_arbitrarily in arb_tristate(),
    ) -> MeasureProfile {
        MeasureProfile {
            name,
            affects_supply_modes,
            market_access_restriction,
            national_treatment_concern,
            legitimate_objective,
            contribution_to_objective_clear,
            less_trade_restrictive_alternatives_available,
            applied_non_arbitrarily,
        }
    }
}

fn tristate_weight(answer: Tristate, risk_weight: u32) -> u32 {
    match answer {
        Tristate::Unknown => 1,
        Tristate::No => risk_weight,
        Tristate::Yes => 0,
    }
}

proptest! {
    // Evaluation never panics and identical inputs give identical outputs.
    #[test]
    fn evaluation_is_total_and_deterministic(profile in arb_profile()) {
        let a = evaluate(&profile);
        let b = evaluate(&profile);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn no_concern_profiles_stop_low(profile in arb_profile()) {
        prop_assume!(!profile.market_access_restriction && !profile.national_treatment_concern);

        let report = evaluate(&profile);
        prop_assert_eq!(report.outcome, Outcome::NotPrimaFacie);
        prop_assert_eq!(report.assessment.risk, RiskTier::Low);
        prop_assert_eq!(report.assessment.steps.len(), 1);
        prop_assert!(report.assessment.missing_info.is_empty());
    }

    #[test]
    fn missing_objective_stops_at_least_medium(profile in arb_profile()) {
        prop_assume!(profile.market_access_restriction || profile.national_treatment_concern);
        prop_assume!(profile.stated_objective().is_none());

        let report = evaluate(&profile);
        prop_assert_eq!(report.outcome, Outcome::NoObjective);
        prop_assert!(report.assessment.risk >= RiskTier::Medium);
        prop_assert_eq!(report.assessment.missing_info.len(), 1);

        // One or two flag steps plus the objective-not-provided step.
        let flag_steps = usize::from(profile.market_access_restriction)
            + usize::from(profile.national_treatment_concern);
        prop_assert_eq!(report.assessment.steps.len(), flag_steps + 1);
    }

    // For fully evaluated profiles the score decomposes exactly into the
    // documented per-checkpoint weights, and the tier follows the thresholds.
    #[test]
    fn full_evaluation_score_decomposes(profile in arb_profile()) {
        prop_assume!(profile.market_access_restriction || profile.national_treatment_concern);
        prop_assume!(profile.stated_objective().is_some());

        let report = evaluate(&profile);
        prop_assert_eq!(report.outcome, Outcome::FullyEvaluated);

        let flag_score = 2 * (u32::from(profile.market_access_restriction)
            + u32::from(profile.national_treatment_concern));
        // Alternatives score risk on Yes, so flip the answer before weighing.
        let alternatives = match profile.less_trade_restrictive_alternatives_available {
            Tristate::Yes => Tristate::No,
            Tristate::No => Tristate::Yes,
            Tristate::Unknown => Tristate::Unknown,
        };
        let expected = flag_score
            + 1
            + tristate_weight(profile.contribution_to_objective_clear, 2)
            + tristate_weight(alternatives, 2)
            + tristate_weight(profile.applied_non_arbitrarily, 3);
        prop_assert_eq!(report.score, expected);

        let expected_tier = if report.score >= 6 {
            RiskTier::High
        } else if report.score >= 3 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        };
        prop_assert_eq!(report.assessment.risk, expected_tier);
    }

    // Each tri-state contributes exactly one of: a step (answered) or a
    // missing-info entry (unknown). Steps 1 and 2 contribute only steps.
    #[test]
    fn full_evaluation_counting_laws(profile in arb_profile()) {
        prop_assume!(profile.market_access_restriction || profile.national_treatment_concern);
        prop_assume!(profile.stated_objective().is_some());

        let report = evaluate(&profile);

        let unknowns = [
            profile.contribution_to_objective_clear,
            profile.less_trade_restrictive_alternatives_available,
            profile.applied_non_arbitrarily,
        ]
        .into_iter()
        .filter(Tristate::is_unknown)
        .count();

        let flag_steps = usize::from(profile.market_access_restriction)
            + usize::from(profile.national_treatment_concern);

        prop_assert_eq!(report.assessment.missing_info.len(), unknowns);
        prop_assert_eq!(report.assessment.steps.len(), flag_steps + 1 + (3 - unknowns));
    }
}
