//! Content scoring: word-count window and structural markers.

use crate::config::ScoringConfig;
use crate::markup;
use crate::text;

use super::clamp_score;
use super::reports::ContentReport;

/// Score the body of a publication.
///
/// Headings and images earn bonuses, so the raw score can leave
/// `0..=100` in either direction; it is clamped on both ends.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_content(content: &str, config: &ScoringConfig) -> ContentReport {
    let adj = &config.adjustments;
    let optimal = config.content;
    let word_count = text::word_count(content);
    let structure = markup::probe_structure(content, &config.markers);
    let mut score: i32 = 100;
    let mut suggestions = Vec::new();

    if word_count == 0 {
        suggestions.push("No content provided.".to_string());
    }

    if word_count < optimal.min {
        score = score.saturating_sub_unsigned(adj.content_too_short);
        suggestions.push(format!(
            "Content is too short; write at least {} words.",
            optimal.min
        ));
    } else if word_count > optimal.max {
        score = score.saturating_sub_unsigned(adj.content_too_long);
        suggestions.push(format!(
            "Content is too long; keep it to at most {} words.",
            optimal.max
        ));
    }

    if structure.has_headings {
        score = score.saturating_add_unsigned(adj.heading_bonus);
    } else {
        score = score.saturating_sub_unsigned(adj.heading_missing);
        suggestions.push("Use headings to structure the content.".to_string());
    }

    if structure.has_images {
        score = score.saturating_add_unsigned(adj.image_bonus);
    } else {
        suggestions.push("Add illustrative images.".to_string());
    }

    let score = clamp_score(score);
    tracing::debug!(
        score,
        word_count,
        has_headings = structure.has_headings,
        has_images = structure.has_images,
        "content scored"
    );

    ContentReport {
        score,
        word_count,
        optimal,
        has_headings: structure.has_headings,
        has_images: structure.has_images,
        suggestions,
    }
}
