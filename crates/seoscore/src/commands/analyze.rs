//! Analyze command — score a content item.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscore_core::analysis::AnalysisReport;
use seoscore_core::{AnalysisInput, ScoringConfig, analyze};

use super::read_input;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// JSON file holding `{title, description, content, keywords}`.
    /// Reads standard input when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Minimum acceptable overall score (0–100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Print a human-readable summary instead of JSON.
    #[arg(long)]
    pub summary: bool,
}

/// Score a content item and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(source))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    scoring: &ScoringConfig,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let source = args
        .file
        .as_ref()
        .filter(|p| p.as_str() != "-")
        .map_or_else(|| "<stdin>".to_string(), ToString::to_string);
    tracing::Span::current().record("source", source.as_str());
    debug!(min_score = ?args.min_score, summary = args.summary, "executing analyze command");

    let raw = read_input(args.file.as_deref(), max_input_bytes)?;
    let input = AnalysisInput::from_json_str(&raw)
        .with_context(|| format!("failed to parse {source}"))?;

    let report = analyze(&input, scoring);
    let min_score = args.min_score.or(config_min_score);

    if args.summary && !global_json {
        print_summary(&source, &report);
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(min) = min_score
        && report.overall < min
    {
        bail!(
            "{source} overall score {} is below minimum {min}. Address the suggestions above.",
            report.overall,
        );
    }

    Ok(())
}

fn print_summary(source: &str, report: &AnalysisReport) {
    println!("{}", source.bold());
    println!("\n  {} {}/100", "Overall:".bold(), paint(report.overall));

    let details = [
        format!(
            "{} chars (optimal {}–{})",
            report.title.length, report.title.optimal.min, report.title.optimal.max
        ),
        format!(
            "{} chars (optimal {}–{})",
            report.description.length,
            report.description.optimal.min,
            report.description.optimal.max
        ),
        format!(
            "{} words, headings: {}, images: {}",
            report.content.word_count,
            yes_no(report.content.has_headings),
            yes_no(report.content.has_images)
        ),
        format!("density {:.2}%", report.keywords.density),
        format!(
            "{}, {:.1} words/sentence, {:.2} syllables/word",
            report.readability.level,
            report.readability.avg_words_per_sentence,
            report.readability.avg_syllables_per_word
        ),
    ];

    println!();
    for (dimension, detail) in report.dimensions().iter().zip(details) {
        println!(
            "  {:<13} {:>3}/100  {}",
            format!("{}:", dimension.name()).cyan(),
            paint(dimension.score()),
            detail.dimmed()
        );
    }

    for kw in &report.keywords.per_keyword {
        println!(
            "    {} {} × {} ({:.2}%)",
            "·".dimmed(),
            kw.keyword,
            kw.occurrences,
            kw.density
        );
    }

    if report.suggestion_count() > 0 {
        println!("\n  {}", "Suggestions:".yellow());
        for dimension in report.dimensions() {
            for suggestion in dimension.suggestions() {
                println!("    [{}] {}", dimension.name().dimmed(), suggestion);
            }
        }
    }
}

fn paint(score: u8) -> String {
    match score {
        80..=100 => score.green().to_string(),
        60..=79 => score.yellow().to_string(),
        _ => score.red().to_string(),
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
