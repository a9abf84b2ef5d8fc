//! Explain registry for the assessment checkpoints.
//!
//! Maps checkpoint IDs to human-readable explanations of what the checkpoint
//! probes and which profile inputs it consumes.

use crate::ids;

/// Explanation entry for a checkpoint.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short name of the checkpoint.
    pub title: &'static str,
    /// What the checkpoint probes and why it exists.
    pub description: &'static str,
    /// Which profile fields feed it and how to unblock a missing-info entry.
    pub inputs: &'static str,
}

/// Look up an explanation by checkpoint ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_PRIMA_FACIE => Some(explain_prima_facie()),
        ids::CHECK_LEGITIMATE_OBJECTIVE => Some(explain_legitimate_objective()),
        ids::CHECK_NECESSITY => Some(explain_necessity()),
        ids::CHECK_CHAPEAU => Some(explain_chapeau()),
        _ => None,
    }
}

/// List all known checkpoint IDs, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_PRIMA_FACIE,
        ids::CHECK_LEGITIMATE_OBJECTIVE,
        ids::CHECK_NECESSITY,
        ids::CHECK_CHAPEAU,
    ]
}

fn explain_prima_facie() -> Explanation {
    Explanation {
        title: "Prima Facie Screening (Art. XVI / XVII)",
        description: "\
Checks the two proxy flags for an initial, unverified indication that the
measure may raise a trade-law issue: a market-access restriction (Art. XVI)
and a national-treatment concern (Art. XVII). Each flagged concern adds to the
risk score. If neither flag is set the assessment stops here with a Low tier;
the remaining checkpoints never run.",
        inputs: "\
`market_access_restriction` and `national_treatment_concern` (required
booleans). These are screening proxies, not findings of inconsistency.",
    }
}

fn explain_legitimate_objective() -> Explanation {
    Explanation {
        title: "Legitimate Objective (Art. XIV)",
        description: "\
Checks whether a policy justification for the measure has been stated, e.g.
privacy or security. Without one the justification analysis cannot be
structured at all, so the assessment records the gap, scores it, and stops;
the necessity and chapeau checkpoints never run.",
        inputs: "\
`legitimate_objective` (optional string). Supply the objective the measure is
purported to serve to unblock the remaining checkpoints. An empty string is
treated the same as an absent one.",
    }
}

fn explain_necessity() -> Explanation {
    Explanation {
        title: "Necessity / Proportionality Proxies",
        description: "\
Two independent sub-checks, both always evaluated once reached. First: is the
measure's contribution to its stated objective demonstrably clear? An unclear
contribution is a risk factor. Second: are reasonably available, less
trade-restrictive alternatives present? Available alternatives are a risk
factor, since the measure may not be the minimally restrictive option.",
        inputs: "\
`contribution_to_objective_clear` and
`less_trade_restrictive_alternatives_available` (optional booleans). Leaving
either unset records a missing-info entry instead of a reasoning step.",
    }
}

fn explain_chapeau() -> Explanation {
    Explanation {
        title: "Chapeau-Style Application Check",
        description: "\
Proxy for the chapeau requirement: is the measure applied in a non-arbitrary,
non-discriminatory manner? Arbitrary or discriminatory application is the
heaviest single risk factor in the sequence.",
        inputs: "\
`applied_non_arbitrarily` (optional boolean). Leaving it unset records a
missing-info entry instead of a reasoning step.",
    }
}
