use gatsguard_types::GatsguardReport;

/// Short plain-text form for terminal output.
pub fn render_summary(report: &GatsguardReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}: {} risk (score {})\n",
        report.measure, report.assessment.risk, report.score
    ));

    for step in &report.assessment.steps {
        out.push_str(&format!("  {}\n", step));
    }

    if !report.assessment.missing_info.is_empty() {
        out.push_str(&format!(
            "missing information ({}):\n",
            report.assessment.missing_info.len()
        ));
        for item in &report.assessment.missing_info {
            out.push_str(&format!("  ? {}\n", item));
        }
    }

    out
}
