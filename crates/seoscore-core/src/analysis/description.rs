//! Description scoring: length window and topicality.

use crate::config::ScoringConfig;
use crate::text;

use super::reports::DescriptionReport;
use super::{clamp_score, mentions_domain_keyword};

/// Score a short description.
///
/// Same shape as the title rules, without the capitalization check.
#[tracing::instrument(skip_all, fields(description_len = description.len()))]
pub fn analyze_description(description: &str, config: &ScoringConfig) -> DescriptionReport {
    let adj = &config.adjustments;
    let optimal = config.description;
    let length = text::char_length(description);
    let mut score: i32 = 100;
    let mut suggestions = Vec::new();

    if description.trim().is_empty() {
        suggestions.push("No description provided.".to_string());
    }

    if length < optimal.min {
        score = score.saturating_sub_unsigned(adj.description_too_short);
        suggestions.push(format!(
            "Description is too short; use at least {} characters.",
            optimal.min
        ));
    } else if length > optimal.max {
        score = score.saturating_sub_unsigned(adj.description_too_long);
        suggestions.push(format!(
            "Description is too long; keep it to at most {} characters.",
            optimal.max
        ));
    }

    if !mentions_domain_keyword(description, &config.domain_keywords) {
        score = score.saturating_sub_unsigned(adj.description_off_topic);
        suggestions.push("Include a topical keyword in the description.".to_string());
    }

    let score = clamp_score(score);
    tracing::debug!(score, length, "description scored");

    DescriptionReport {
        score,
        length,
        optimal,
        suggestions,
    }
}
