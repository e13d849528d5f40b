//! The analysis request payload and its validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// A content item submitted for scoring.
///
/// All four fields are required when deserializing; an empty string or an
/// empty list is a valid value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisInput {
    /// Page title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Body text. May contain Markdown or HTML.
    pub content: String,
    /// Target keywords.
    pub keywords: Vec<String>,
}

impl AnalysisInput {
    /// Parse an input from a JSON string.
    pub fn from_json_str(json: &str) -> AnalysisResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an input from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> AnalysisResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse an input from raw JSON bytes, rejecting payloads over `limit`.
    pub fn from_slice_limited(bytes: &[u8], limit: Option<usize>) -> AnalysisResult<Self> {
        check_size(bytes.len(), limit)?;
        Self::from_slice(bytes)
    }
}

/// Fail with [`AnalysisError::InputTooLarge`] when `size` exceeds `limit`.
pub fn check_size(size: usize, limit: Option<usize>) -> AnalysisResult<()> {
    match limit {
        Some(limit) if size > limit => Err(AnalysisError::InputTooLarge { size, limit }),
        _ => Ok(()),
    }
}
