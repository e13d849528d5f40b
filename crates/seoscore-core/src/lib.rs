//! Core library for seoscore.
//!
//! Scores a content item (title, meta description, body, target keywords)
//! across five independent dimensions and folds them into one overall
//! score, with human-readable suggestions for every deduction.
//!
//! # Modules
//!
//! - [`analysis`] - The five dimension analyzers and the orchestrator
//! - [`config`] - Scoring rules and application configuration
//! - [`error`] - Error types and result aliases
//! - [`input`] - The analysis request payload
//! - [`markup`] - Heading and image detection
//! - [`text`] - Length, word, sentence and syllable metrics
//!
//! # Quick Start
//!
//! ```no_run
//! use seoscore_core::{AnalysisInput, ConfigLoader, analyze};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//!
//! let input = AnalysisInput::from_json_str(
//!     r#"{"title":"Tenancy law explained","description":"","content":"","keywords":[]}"#,
//! )
//! .expect("valid input");
//!
//! let report = analyze(&input, &config.scoring);
//! println!("overall: {}", report.overall);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod input;
pub mod markup;
pub mod text;

pub use analysis::{AnalysisReport, ReadabilityLevel, analyze, analyze_sequential};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, ScoringConfig};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use input::AnalysisInput;

/// Default cap on the size of a single analysis request, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
