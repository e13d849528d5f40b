//! Report structs for the five scoring dimensions.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output, MCP tool responses and the HTTP service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::OptimalRange;

/// Common view over a dimension report.
pub trait Dimension {
    /// Stable dimension name (`title`, `description`, ...).
    fn name(&self) -> &'static str;
    /// Score in `0..=100`.
    fn score(&self) -> u8;
    /// Suggestions produced by the rules that fired, in rule order.
    fn suggestions(&self) -> &[String];
}

macro_rules! impl_dimension {
    ($report:ty, $name:literal) => {
        impl Dimension for $report {
            fn name(&self) -> &'static str {
                $name
            }

            fn score(&self) -> u8 {
                self.score
            }

            fn suggestions(&self) -> &[String] {
                &self.suggestions
            }
        }
    };
}

/// Full analysis report: five dimensions plus the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Title length, topicality and capitalization.
    pub title: TitleReport,
    /// Description length and topicality.
    pub description: DescriptionReport,
    /// Content length and structure.
    pub content: ContentReport,
    /// Target keyword density.
    pub keywords: KeywordReport,
    /// Sentence and word complexity.
    pub readability: ReadabilityReport,
    /// Rounded mean of the five dimension scores.
    pub overall: u8,
}

impl AnalysisReport {
    /// The five dimension reports in canonical order.
    pub fn dimensions(&self) -> [&dyn Dimension; 5] {
        [
            &self.title,
            &self.description,
            &self.content,
            &self.keywords,
            &self.readability,
        ]
    }

    /// Total number of suggestions across all dimensions.
    pub fn suggestion_count(&self) -> usize {
        self.dimensions()
            .iter()
            .map(|d| d.suggestions().len())
            .sum()
    }
}

// -- Title ------------------------------------------------------------------

/// Title dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TitleReport {
    /// Score in `0..=100`.
    pub score: u8,
    /// Title length in characters.
    pub length: usize,
    /// Configured length window.
    pub optimal: OptimalRange,
    /// Improvement suggestions.
    pub suggestions: Vec<String>,
}

impl_dimension!(TitleReport, "title");

// -- Description ------------------------------------------------------------

/// Description dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DescriptionReport {
    /// Score in `0..=100`.
    pub score: u8,
    /// Description length in characters.
    pub length: usize,
    /// Configured length window.
    pub optimal: OptimalRange,
    /// Improvement suggestions.
    pub suggestions: Vec<String>,
}

impl_dimension!(DescriptionReport, "description");

// -- Content ----------------------------------------------------------------

/// Content dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContentReport {
    /// Score in `0..=100`.
    pub score: u8,
    /// Whitespace-delimited word count.
    pub word_count: usize,
    /// Configured word-count window.
    pub optimal: OptimalRange,
    /// Whether a heading marker was found.
    pub has_headings: bool,
    /// Whether an image marker was found.
    pub has_images: bool,
    /// Improvement suggestions.
    pub suggestions: Vec<String>,
}

impl_dimension!(ContentReport, "content");

// -- Keywords ---------------------------------------------------------------

/// Keyword dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordReport {
    /// Score in `0..=100`.
    pub score: u8,
    /// Average density across all keywords, in percent.
    pub density: f64,
    /// Per-keyword breakdown, in input order.
    pub per_keyword: Vec<KeywordDensity>,
    /// Improvement suggestions.
    pub suggestions: Vec<String>,
}

impl_dimension!(KeywordReport, "keywords");

/// Occurrences and density of one target keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordDensity {
    /// The keyword as supplied.
    pub keyword: String,
    /// Case-insensitive, non-overlapping occurrences in the content.
    pub occurrences: usize,
    /// `occurrences / word_count * 100`, or 0 for empty content.
    pub density: f64,
}

// -- Readability ------------------------------------------------------------

/// Three-tier readability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLevel {
    /// Score at or above the `Easy` cut-off.
    Easy,
    /// Score between the `Medium` and `Easy` cut-offs.
    Medium,
    /// Score below the `Medium` cut-off.
    Hard,
}

impl ReadabilityLevel {
    /// Returns the level label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readability dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Score in `0..=100`.
    pub score: u8,
    /// Label derived from the score.
    pub level: ReadabilityLevel,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Vowel-count syllable estimate.
    pub syllables: usize,
    /// `words / sentences`, 0 when there are no sentences.
    pub avg_words_per_sentence: f64,
    /// `syllables / words`, 0 when there are no words.
    pub avg_syllables_per_word: f64,
    /// Improvement suggestions.
    pub suggestions: Vec<String>,
}

impl_dimension!(ReadabilityReport, "readability");
