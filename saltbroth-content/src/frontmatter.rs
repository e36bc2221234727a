//! YAML front-matter parsing for content documents.
//!
//! Every content document is a text body optionally prefixed with a YAML
//! metadata block delimited by `---` lines. The parser is deliberately
//! tolerant: a missing, empty, or unclosed block yields no metadata rather
//! than an error, because plenty of authored content carries none.

use crate::error::{ContentError, Result};
use serde_json::Value;

/// Parsed front-matter and the remaining document body.
#[derive(Debug, Clone)]
pub struct FrontmatterResult {
    /// Parsed YAML metadata (None if no front-matter block).
    pub metadata: Option<Value>,
    /// Remaining content after front-matter removal.
    pub body: String,
}

/// Split a document into YAML front-matter and body.
///
/// # Format
/// ```markdown
/// ---
/// name: Business
/// icon: briefcase
/// ---
/// Body text goes here
/// ```
///
/// Returns an error only when a front-matter block is present and delimited
/// but its YAML does not parse.
pub fn parse_frontmatter(content: &str) -> Result<FrontmatterResult> {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return Ok(FrontmatterResult {
            metadata: None,
            body: content.to_string(),
        });
    }

    // Find the line ending after the opening "---"
    let after_first_delimiter = &content[3..];
    let start_pos = if after_first_delimiter.starts_with('\n') {
        4
    } else if after_first_delimiter.starts_with("\r\n") {
        5
    } else {
        // Not a delimiter line (e.g. "---foo"), treat as no front-matter
        return Ok(FrontmatterResult {
            metadata: None,
            body: content.to_string(),
        });
    };

    let Some(end_pos) = find_closing_delimiter(&content[start_pos..]) else {
        // No closing delimiter, treat the whole document as body
        return Ok(FrontmatterResult {
            metadata: None,
            body: content.to_string(),
        });
    };

    let yaml_content = &content[start_pos..start_pos + end_pos];
    let remaining = content[start_pos + end_pos..]
        .strip_prefix("---")
        .unwrap_or(&content[start_pos + end_pos..])
        .trim_start_matches('\r')
        .trim_start_matches('\n');

    let metadata = if yaml_content.trim().is_empty() {
        None
    } else {
        match serde_yaml_ng::from_str::<Value>(yaml_content) {
            Ok(value) => Some(value),
            Err(e) => {
                return Err(ContentError::Frontmatter {
                    message: e.to_string(),
                });
            }
        }
    };

    Ok(FrontmatterResult {
        metadata,
        body: remaining.to_string(),
    })
}

/// Find the closing front-matter delimiter ("---" on its own line).
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    for line in content.lines() {
        if line.trim() == "---" {
            return Some(pos);
        }
        pos += line.len() + 1;
    }
    None
}
