//! Keyword density scoring.

use crate::config::ScoringConfig;
use crate::text;

use super::clamp_score;
use super::reports::{KeywordDensity, KeywordReport};

/// Score how often the target keywords appear in the content.
///
/// Density for one keyword is `occurrences / word_count * 100`; the score
/// is driven by the mean density across all supplied keywords, duplicates
/// included. No keywords at all is a terminal case scoring 0.
#[tracing::instrument(skip_all, fields(keywords = keywords.len(), content_len = content.len()))]
pub fn analyze_keywords(keywords: &[String], content: &str, config: &ScoringConfig) -> KeywordReport {
    if keywords.is_empty() {
        tracing::debug!("no target keywords supplied");
        return KeywordReport {
            score: 0,
            density: 0.0,
            per_keyword: Vec::new(),
            suggestions: vec!["Add target keywords.".to_string()],
        };
    }

    let adj = &config.adjustments;
    let word_count = text::word_count(content);
    let haystack = content.to_lowercase();

    let per_keyword: Vec<KeywordDensity> = keywords
        .iter()
        .map(|keyword| {
            let occurrences = count_occurrences(&haystack, keyword);
            let density = if word_count == 0 {
                0.0
            } else {
                occurrences as f64 / word_count as f64 * 100.0
            };
            KeywordDensity {
                keyword: keyword.clone(),
                occurrences,
                density,
            }
        })
        .collect();

    let density = per_keyword.iter().map(|k| k.density).sum::<f64>() / per_keyword.len() as f64;

    let mut score: i32 = 100;
    let mut suggestions = Vec::new();

    if word_count == 0 {
        suggestions.push("No content provided.".to_string());
    }

    if density < config.keyword_density.min {
        score = score.saturating_sub_unsigned(adj.keywords_sparse);
        suggestions.push("Use target keywords more frequently in the content.".to_string());
    }
    if density > config.keyword_density.max {
        score = score.saturating_sub_unsigned(adj.keywords_dense);
        suggestions.push("Keyword density is too high; reduce repetition.".to_string());
    }

    let score = clamp_score(score);
    tracing::debug!(score, density, word_count, "keywords scored");

    KeywordReport {
        score,
        density,
        per_keyword,
        suggestions,
    }
}

/// Case-insensitive, non-overlapping occurrences of `keyword` in an
/// already lower-cased `haystack`. Blank keywords never match.
fn count_occurrences(haystack: &str, keyword: &str) -> usize {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle.as_str()).count()
}
