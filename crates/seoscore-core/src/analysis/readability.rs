//! Readability scoring from sentence length and word complexity.
//!
//! Syllables are estimated by counting vowel characters (see
//! [`text::vowel_count`]); no dictionary is involved.

use crate::config::{ReadabilityThresholds, ScoringConfig};
use crate::text;

use super::clamp_score;
use super::reports::{ReadabilityLevel, ReadabilityReport};

/// Score how easy the content is to read.
///
/// Averages with a zero denominator are defined as `0`, so empty content
/// scores 100 (`Easy`) and carries a "no content" suggestion.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_readability(content: &str, config: &ScoringConfig) -> ReadabilityReport {
    let adj = &config.adjustments;
    let thresholds = &config.readability;

    let sentences = text::sentence_count(content);
    let words = text::word_count(content);
    let syllables = text::vowel_count(content, &config.syllables);

    let avg_words_per_sentence = ratio(words, sentences);
    let avg_syllables_per_word = ratio(syllables, words);

    let mut score: i32 = 100;
    let mut suggestions = Vec::new();

    if words == 0 {
        suggestions.push("No content provided.".to_string());
    }

    if avg_words_per_sentence > thresholds.max_words_per_sentence {
        score = score.saturating_sub_unsigned(adj.long_sentences);
        suggestions.push(format!(
            "Shorten sentences; aim for at most {} words per sentence.",
            thresholds.max_words_per_sentence
        ));
    }
    if avg_syllables_per_word > thresholds.max_syllables_per_word {
        score = score.saturating_sub_unsigned(adj.complex_words);
        suggestions.push("Prefer simpler words.".to_string());
    }

    let score = clamp_score(score);
    let level = level_for(score, thresholds);
    tracing::debug!(
        score,
        %level,
        avg_words_per_sentence,
        avg_syllables_per_word,
        "readability scored"
    );

    ReadabilityReport {
        score,
        level,
        sentences,
        words,
        syllables,
        avg_words_per_sentence,
        avg_syllables_per_word,
        suggestions,
    }
}

/// Map a score onto the three readability tiers.
pub const fn level_for(score: u8, thresholds: &ReadabilityThresholds) -> ReadabilityLevel {
    if score >= thresholds.easy_min_score {
        ReadabilityLevel::Easy
    } else if score >= thresholds.medium_min_score {
        ReadabilityLevel::Medium
    } else {
        ReadabilityLevel::Hard
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
