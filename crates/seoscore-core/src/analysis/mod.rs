//! Content quality analysis.
//!
//! Five independent dimensions, each a pure function in its own module,
//! orchestrated by [`analyze`]. Callers can also invoke dimensions
//! individually.

pub mod composite;
pub mod content;
pub mod description;
pub mod keywords;
pub mod readability;
pub mod reports;
pub mod title;

use std::collections::BTreeSet;

pub use reports::{
    AnalysisReport, ContentReport, DescriptionReport, Dimension, KeywordDensity, KeywordReport,
    ReadabilityLevel, ReadabilityReport, TitleReport,
};

use crate::config::ScoringConfig;
use crate::input::AnalysisInput;

/// All dimension names, in report order.
pub const ALL_DIMENSIONS: &[&str] = &["title", "description", "content", "keywords", "readability"];

/// Run all five dimensions and fold them into an [`AnalysisReport`].
///
/// The dimensions share no data, so they run concurrently on the rayon
/// pool and are joined before the composite score is taken. The result is
/// identical to [`analyze_sequential`].
#[tracing::instrument(
    skip_all,
    fields(
        title_len = input.title.len(),
        content_len = input.content.len(),
        keywords = input.keywords.len()
    )
)]
pub fn analyze(input: &AnalysisInput, config: &ScoringConfig) -> AnalysisReport {
    let ((title, description), ((content, keywords), readability)) = rayon::join(
        || {
            rayon::join(
                || title::analyze_title(&input.title, config),
                || description::analyze_description(&input.description, config),
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || content::analyze_content(&input.content, config),
                        || keywords::analyze_keywords(&input.keywords, &input.content, config),
                    )
                },
                || readability::analyze_readability(&input.content, config),
            )
        },
    );

    assemble(title, description, content, keywords, readability)
}

/// Run the five dimensions one after another on the calling thread.
#[tracing::instrument(skip_all)]
pub fn analyze_sequential(input: &AnalysisInput, config: &ScoringConfig) -> AnalysisReport {
    assemble(
        title::analyze_title(&input.title, config),
        description::analyze_description(&input.description, config),
        content::analyze_content(&input.content, config),
        keywords::analyze_keywords(&input.keywords, &input.content, config),
        readability::analyze_readability(&input.content, config),
    )
}

fn assemble(
    title: TitleReport,
    description: DescriptionReport,
    content: ContentReport,
    keywords: KeywordReport,
    readability: ReadabilityReport,
) -> AnalysisReport {
    let overall = composite::overall_score([
        title.score,
        description.score,
        content.score,
        keywords.score,
        readability.score,
    ]);
    tracing::info!(
        overall,
        title = title.score,
        description = description.score,
        content = content.score,
        keywords = keywords.score,
        readability = readability.score,
        "analysis complete"
    );

    AnalysisReport {
        title,
        description,
        content,
        keywords,
        readability,
        overall,
    }
}

/// Clamp a raw rule total into `0..=100`.
pub(crate) fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Whether any non-blank domain keyword occurs in `text`, ignoring case.
///
/// An empty keyword set disables the check.
pub(crate) fn mentions_domain_keyword(text: &str, domain_keywords: &BTreeSet<String>) -> bool {
    let mut terms = domain_keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .peekable();
    if terms.peek().is_none() {
        return true;
    }
    let haystack = text.to_lowercase();
    terms.any(|term| haystack.contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_input() -> AnalysisInput {
        let body = vec!["The tenant may terminate the lease under the new law."; 40].join(" ");
        AnalysisInput {
            title: "Understanding the New Law on Digital Contracts in 2024.".to_string(),
            description: "A practical guide to how the reformed legislation changes \
                          commercial tenancy disputes, deposits and early termination rights."
                .to_string(),
            content: format!("## Overview\n\n{body}\n\n![diagram](lease.png)"),
            keywords: vec!["lease".to_string(), "tenant".to_string()],
        }
    }

    #[test]
    fn full_analysis_runs() {
        let report = analyze(&sample_input(), &ScoringConfig::default());
        assert_eq!(report.title.score, 100);
        assert_eq!(report.content.score, 100);
        assert_eq!(report.readability.level, ReadabilityLevel::Easy);
        assert!(report.overall > 80);
    }

    #[test]
    fn empty_input_does_not_panic() {
        let input = AnalysisInput::default();
        let report = analyze(&input, &ScoringConfig::default());
        assert_eq!(report.keywords.score, 0);
        assert_eq!(report.readability.score, 100);
        assert!(report.suggestion_count() > 0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let config = ScoringConfig::default();
        let input = sample_input();
        assert_eq!(analyze(&input, &config), analyze_sequential(&input, &config));
    }

    #[test]
    fn overall_is_mean_of_dimensions() {
        let report = analyze(&sample_input(), &ScoringConfig::default());
        let scores = report.dimensions().map(|d| d.score());
        assert_eq!(report.overall, composite::overall_score(scores));
    }

    #[test]
    fn dimension_names_follow_report_order() {
        let report = analyze(&AnalysisInput::default(), &ScoringConfig::default());
        let names: Vec<&str> = report.dimensions().iter().map(|d| d.name()).collect();
        assert_eq!(names, ALL_DIMENSIONS);
    }

    #[test]
    fn empty_domain_set_disables_topic_check() {
        let set = BTreeSet::new();
        assert!(mentions_domain_keyword("anything", &set));
        let set: BTreeSet<String> = ["Law".to_string()].into();
        assert!(mentions_domain_keyword("by-laws apply", &set));
        assert!(!mentions_domain_keyword("gardening tips", &set));
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_score(-45), 0);
        assert_eq!(clamp_score(115), 100);
        assert_eq!(clamp_score(55), 55);
    }

    fn arbitrary_input() -> impl Strategy<Value = AnalysisInput> {
        (
            ".{0,80}",
            ".{0,200}",
            prop::collection::vec("[a-zA-Z#!?. <>\n]{0,12}", 0..120),
            prop::collection::vec("[a-zA-Z ]{0,8}", 0..6),
        )
            .prop_map(|(title, description, words, keywords)| AnalysisInput {
                title,
                description,
                content: words.join(" "),
                keywords,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn scores_stay_in_range(input in arbitrary_input()) {
            let report = analyze(&input, &ScoringConfig::default());
            for dimension in report.dimensions() {
                prop_assert!(dimension.score() <= 100);
            }
            prop_assert!(report.overall <= 100);
            prop_assert!(report.keywords.density.is_finite());
            prop_assert!(report.readability.avg_words_per_sentence.is_finite());
            prop_assert!(report.readability.avg_syllables_per_word.is_finite());
        }

        #[test]
        fn analysis_is_deterministic(input in arbitrary_input()) {
            let config = ScoringConfig::default();
            prop_assert_eq!(analyze(&input, &config), analyze(&input, &config));
        }
    }
}
