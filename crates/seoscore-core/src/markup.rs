//! Structural marker detection in marked-up content.
//!
//! Content arrives from the editor as HTML or as Markdown. Markdown
//! headings and images are found with pulldown-cmark; raw HTML tags and any
//! other configured literal markers are found with a case-insensitive
//! Aho-Corasick scan. Neither pass tries to validate the markup.

use aho_corasick::AhoCorasick;
use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::config::MarkerConfig;

/// Structural features present in a piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structure {
    /// At least one heading marker was found.
    pub has_headings: bool,
    /// At least one image-embed marker was found.
    pub has_images: bool,
}

/// Detect heading and image markers in `content`.
#[tracing::instrument(skip_all, fields(input_len = content.len()))]
pub fn probe_structure(content: &str, markers: &MarkerConfig) -> Structure {
    let mut structure = probe_markdown(content);

    if !structure.has_headings {
        structure.has_headings = contains_any(content, &markers.heading);
    }
    if !structure.has_images {
        structure.has_images = contains_any(content, &markers.image);
    }

    tracing::trace!(
        has_headings = structure.has_headings,
        has_images = structure.has_images,
        "structure probed"
    );
    structure
}

/// Markdown headings (ATX or setext) and inline images.
fn probe_markdown(content: &str) -> Structure {
    let text = strip_frontmatter(content);
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut structure = Structure::default();

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::Heading { .. }) => structure.has_headings = true,
            Event::Start(Tag::Image { .. }) => structure.has_images = true,
            _ => {}
        }
        if structure.has_headings && structure.has_images {
            break;
        }
    }

    structure
}

/// Case-insensitive literal search for any of `markers`.
///
/// Blank markers are ignored; an empty pattern would match everywhere.
fn contains_any(content: &str, markers: &[String]) -> bool {
    let patterns: Vec<&str> = markers
        .iter()
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .collect();
    if patterns.is_empty() {
        return false;
    }

    match AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&patterns)
    {
        Ok(matcher) => matcher.is_match(content),
        Err(err) => {
            tracing::warn!(error = %err, "invalid marker set, skipping literal scan");
            false
        }
    }
}

/// Skip YAML frontmatter delimited by `---` lines.
///
/// Without this the closing `---` turns the last frontmatter line into a
/// setext heading.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
