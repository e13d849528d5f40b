//! Title scoring: length window, topicality and capitalization.

use crate::config::ScoringConfig;
use crate::text;

use super::reports::TitleReport;
use super::{clamp_score, mentions_domain_keyword};

/// Score a title.
///
/// Starts at 100 and deducts for a length outside the window (too short
/// and too long are exclusive), a missing domain keyword, and a lower-case
/// first letter.
///
/// The capitalization rule fires only when the first character is a
/// lower-case letter. A title that opens with a digit, punctuation or an
/// uncased letter is not "upper-case" either, but it is left alone.
#[tracing::instrument(skip_all, fields(title_len = title.len()))]
pub fn analyze_title(title: &str, config: &ScoringConfig) -> TitleReport {
    let adj = &config.adjustments;
    let optimal = config.title;
    let length = text::char_length(title);
    let mut score: i32 = 100;
    let mut suggestions = Vec::new();

    if title.trim().is_empty() {
        suggestions.push("No title provided.".to_string());
    }

    if length < optimal.min {
        score = score.saturating_sub_unsigned(adj.title_too_short);
        suggestions.push(format!(
            "Title is too short; use at least {} characters.",
            optimal.min
        ));
    } else if length > optimal.max {
        score = score.saturating_sub_unsigned(adj.title_too_long);
        suggestions.push(format!(
            "Title is too long; keep it to at most {} characters.",
            optimal.max
        ));
    }

    if !mentions_domain_keyword(title, &config.domain_keywords) {
        score = score.saturating_sub_unsigned(adj.title_off_topic);
        suggestions.push("Include a topical keyword in the title.".to_string());
    }

    if title.chars().next().is_some_and(char::is_lowercase) {
        score = score.saturating_sub_unsigned(adj.title_lowercase);
        suggestions.push("Capitalize the first letter of the title.".to_string());
    }

    let score = clamp_score(score);
    tracing::debug!(score, length, "title scored");

    TitleReport {
        score,
        length,
        optimal,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn law_config() -> ScoringConfig {
        ScoringConfig::default().with_domain_keywords(["law"])
    }

    #[test]
    fn empty_title_scores_55() {
        let report = analyze_title("", &law_config());
        assert_eq!(report.score, 55);
        assert_eq!(report.length, 0);
        assert!(report.suggestions.iter().any(|s| s.contains("50")));
        assert!(!report.suggestions.iter().any(|s| s.contains("Capitalize")));
    }

    #[test]
    fn well_formed_title_scores_100() {
        let title = "Understanding the New Law on Digital Contracts in 2024.";
        assert_eq!(title.chars().count(), 55);
        let report = analyze_title(title, &law_config());
        assert_eq!(report.score, 100);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn domain_keyword_match_ignores_case() {
        let title = "LAW REVIEW: what the appellate ruling means for tenants";
        let report = analyze_title(title, &law_config());
        assert!(!report.suggestions.iter().any(|s| s.contains("topical")));
    }

    #[test]
    fn long_lowercase_off_topic_title_stacks_deductions() {
        let title = "a very long title about gardening that keeps going well past the sixty character mark";
        let report = analyze_title(title, &law_config());
        // 100 - 20 (long) - 15 (off topic) - 10 (lower-case)
        assert_eq!(report.score, 55);
        assert_eq!(report.suggestions.len(), 3);
    }

    #[test]
    fn digit_first_character_is_not_penalized() {
        let title = "2024 review of the law governing commercial leases today";
        let report = analyze_title(title, &law_config());
        assert!(!report.suggestions.iter().any(|s| s.contains("Capitalize")));
    }

    #[test]
    fn punctuation_and_uncased_first_characters_are_not_penalized() {
        let config = law_config();
        for title in ["\"Law\" and the tenant", "法 law primer for tenants"] {
            let report = analyze_title(title, &config);
            assert!(
                !report.suggestions.iter().any(|s| s.contains("Capitalize")),
                "{title}"
            );
        }
    }

    #[test]
    fn configured_window_is_reported() {
        let mut config = law_config();
        config.title.min = 10;
        config.title.max = 20;
        let report = analyze_title("Law basics", &config);
        assert_eq!(report.optimal.min, 10);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn extreme_adjustments_saturate_to_zero() {
        let mut config = law_config();
        config.adjustments.title_too_short = u32::MAX;
        config.adjustments.title_off_topic = u32::MAX;
        config.adjustments.title_lowercase = u32::MAX;
        let report = analyze_title("", &config);
        assert_eq!(report.score, 0);

        let report = analyze_title("x", &config);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn i32_max_adjustments_do_not_wrap() {
        let mut config = law_config();
        config.adjustments.title_too_short = i32::MAX as u32;
        config.adjustments.title_off_topic = i32::MAX as u32;
        assert_eq!(analyze_title("", &config).score, 0);
    }
}
