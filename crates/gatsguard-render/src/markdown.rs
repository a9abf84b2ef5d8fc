use gatsguard_types::{GatsguardReport, Outcome};

pub fn render_markdown(report: &GatsguardReport) -> String {
    let mut out = String::new();

    out.push_str("# Gatsguard assessment\n\n");
    out.push_str(&format!(
        "- Measure: **{}**\n- Risk: **{}** (score {})\n- Outcome: {}\n\n",
        report.measure,
        report.assessment.risk,
        report.score,
        outcome_label(report.outcome)
    ));

    out.push_str("## Reasoning steps\n\n");
    for (i, step) in report.assessment.steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    out.push('\n');

    if report.assessment.missing_info.is_empty() {
        out.push_str("No missing information.\n");
        return out;
    }

    out.push_str("## Missing information\n\n");
    for item in &report.assessment.missing_info {
        out.push_str(&format!("- {}\n", item));
    }

    out
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::NotPrimaFacie => "stopped at step 1 (no prima facie concern)",
        Outcome::NoObjective => "stopped at step 2 (no legitimate objective)",
        Outcome::FullyEvaluated => "fully evaluated",
    }
}
