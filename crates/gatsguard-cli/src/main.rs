//! CLI entry point for gatsguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. The assessment logic lives in the `gatsguard-domain` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use gatsguard_render::{render_markdown, render_summary};
use gatsguard_types::{
    lookup_explanation, GatsguardReport, MeasureProfile, RiskTier, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

#[derive(Parser, Debug)]
#[command(
    name = "gatsguard",
    version,
    about = "Rule-based risk screening for GATS measure profiles"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess a measure profile and write the report artifact.
    Assess {
        /// Path to the measure profile (TOML, or JSON with a .json extension).
        profile: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/gatsguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/gatsguard/report.md")]
        markdown_out: Utf8PathBuf,

        /// Exit with code 1 when the assessed risk is at or above this tier.
        #[arg(long, value_name = "TIER")]
        fail_on: Option<RiskTier>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/gatsguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a checkpoint ID (e.g. "gats.necessity").
    Explain {
        /// The checkpoint ID to explain.
        identifier: String,
    },

    /// Emit the JSON Schema for the report envelope or the profile input.
    Schema {
        /// Which schema to emit.
        #[arg(value_parser = ["report", "profile"], default_value = "report")]
        which: String,

        /// Where to write the schema (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Assess {
            profile,
            report_out,
            write_markdown,
            markdown_out,
            fail_on,
        } => cmd_assess(&profile, &report_out, write_markdown, &markdown_out, fail_on),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema { which, output } => cmd_schema(&which, output.as_deref()),
    };

    // Usage and IO failures exit 2, like clap's own usage errors; exit 1 is
    // reserved for the `--fail-on` risk gate.
    if let Err(err) = result {
        eprintln!("gatsguard: {err:#}");
        std::process::exit(2);
    }
}

fn cmd_assess(
    profile_path: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
    fail_on: Option<RiskTier>,
) -> anyhow::Result<()> {
    let profile = load_profile(profile_path)?;

    let started_at = OffsetDateTime::now_utc();
    let domain_report = gatsguard_domain::evaluate(&profile);
    let finished_at = OffsetDateTime::now_utc();

    let report = GatsguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "gatsguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        measure: profile.name.clone(),
        outcome: domain_report.outcome,
        score: domain_report.score,
        assessment: domain_report.assessment,
    };

    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    write_text_file(report_out, &json).context("write report json")?;

    if write_markdown {
        let md = render_markdown(&report);
        write_text_file(markdown_out, &md).context("write markdown")?;
    }

    print!("{}", render_summary(&report));

    if let Some(threshold) = fail_on {
        if report.assessment.risk >= threshold {
            use std::io::Write;
            std::io::stdout().flush().ok();
            eprintln!(
                "gatsguard: risk {} is at or above --fail-on {}",
                report.assessment.risk, threshold
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report {report_path}"))?;
    let report: GatsguardReport =
        serde_json::from_str(&text).with_context(|| format!("parse report {report_path}"))?;

    let md = render_markdown(&report);
    match output {
        Some(path) => write_text_file(path, &md).context("write markdown")?,
        None => print!("{md}"),
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match lookup_explanation(identifier) {
        Some(explanation) => {
            println!("# {}\n", explanation.title);
            println!("{}\n", explanation.description);
            println!("Inputs:\n{}", explanation.inputs);
            Ok(())
        }
        None => {
            eprintln!("gatsguard: unknown checkpoint id '{identifier}'. Known ids:");
            for id in gatsguard_types::explain::all_check_ids() {
                eprintln!("  {id}");
            }
            std::process::exit(2);
        }
    }
}

fn cmd_schema(which: &str, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let schema = match which {
        "profile" => schemars::schema_for!(MeasureProfile),
        _ => schemars::schema_for!(GatsguardReport),
    };
    let json = serde_json::to_string_pretty(&schema).context("serialize schema")?;

    match output {
        Some(path) => write_text_file(path, &json).context("write schema")?,
        None => println!("{json}"),
    }
    Ok(())
}

/// Load a profile from TOML (default) or JSON (by extension).
fn load_profile(path: &Utf8Path) -> anyhow::Result<MeasureProfile> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read profile {path}"))?;
    if path.extension() == Some("json") {
        serde_json::from_str(&text).with_context(|| format!("parse JSON profile {path}"))
    } else {
        toml::from_str(&text).with_context(|| format!("parse TOML profile {path}"))
    }
}

fn write_text_file(path: &Utf8Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory {parent}"))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {path}"))?;
    Ok(())
}
