//! Stable DTOs and IDs used across the gatsguard workspace.
//!
//! This crate is intentionally boring:
//! - the `MeasureProfile` input record and its tri-state fields
//! - data types for the emitted assessment/report
//! - stable string IDs for the four checkpoints
//! - explain registry for checkpoint guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod profile;
pub mod report;

pub use explain::{lookup_explanation, Explanation};
pub use profile::{MeasureProfile, Tristate};
pub use report::{
    Assessment, GatsguardReport, Outcome, ParseRiskTierError, RiskTier, ToolMeta, SCHEMA_REPORT_V1,
};
