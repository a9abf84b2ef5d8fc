use gatsguard_types::{
    Assessment, GatsguardReport, Outcome, RiskTier, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn report_with(
    risk: RiskTier,
    outcome: Outcome,
    score: u32,
    steps: Vec<String>,
    missing_info: Vec<String>,
) -> GatsguardReport {
    GatsguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "gatsguard".to_string(),
            version: "0.0.0".to_string(),
        },
        started_at: OffsetDateTime::UNIX_EPOCH,
        finished_at: OffsetDateTime::UNIX_EPOCH,
        measure: "quota cap".to_string(),
        outcome,
        score,
        assessment: Assessment {
            risk,
            steps,
            missing_info,
        },
    }
}
