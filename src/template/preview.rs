//! Fault-tolerant preview parsing for live UI feedback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parser::parse_line;
use super::validate_template;
use crate::timestamp::format_display_timestamp;

/// Timestamp shown for lines that failed to parse
const INVALID_TIMESTAMP: &str = "--:--";

/// Longest raw line excerpt kept in an invalid preview entry
const MAX_PREVIEW_NAME_CHARS: usize = 30;

/// Preview of one parsed tracklist line, for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackPreview {
    /// 1-based source line number
    pub line_number: usize,
    /// Song name, or a truncated excerpt of the raw line when invalid
    pub name: String,
    /// Display timestamp, `--:--` when the line is invalid
    pub timestamp: String,
    /// Whether the line parsed successfully
    pub is_valid: bool,
    /// Parse failure message for invalid lines
    pub error: Option<String>,
}

/// Aggregate preview of a whole tracklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsePreview {
    /// One entry per non-blank line, in original line order
    pub tracks: Vec<TrackPreview>,
    /// True when every non-blank line parsed and at least one line exists
    pub is_valid: bool,
    /// Number of lines that failed to parse
    pub error_count: usize,
    /// Number of non-blank lines examined
    pub total_lines: usize,
}

fn truncate_name(line: &str) -> String {
    if line.chars().count() > MAX_PREVIEW_NAME_CHARS {
        let excerpt: String = line.chars().take(MAX_PREVIEW_NAME_CHARS).collect();
        format!("{excerpt}...")
    } else {
        line.to_string()
    }
}

/// Generate a parsing preview without failing.
///
/// Every problem becomes data for live rendering: an invalid template yields
/// an empty invalid preview, and each malformed line yields an invalid
/// [`TrackPreview`] carrying the failure message. Entries stay in original
/// line order so the UI keeps stable per-keystroke line identity (the strict
/// parser sorts by start time instead).
pub fn preview_parse(text: &str, template: &str) -> ParsePreview {
    let validation = validate_template(template);
    if !validation.is_valid {
        return ParsePreview {
            tracks: Vec::new(),
            is_valid: false,
            error_count: 1,
            total_lines: 0,
        };
    }

    if text.trim().is_empty() {
        // Nothing typed yet is not an error state in a live preview
        return ParsePreview {
            tracks: Vec::new(),
            is_valid: true,
            error_count: 0,
            total_lines: 0,
        };
    }

    let mut previews: Vec<TrackPreview> = Vec::new();
    let mut error_count = 0;
    let mut total_lines = 0;

    for (i, raw_line) in text.trim().lines().enumerate() {
        let line_number = i + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        total_lines += 1;

        match parse_line(line, template, line_number) {
            Ok(parsed) => previews.push(TrackPreview {
                line_number,
                name: parsed.name,
                timestamp: format_display_timestamp(parsed.hours, parsed.minutes, parsed.seconds),
                is_valid: true,
                error: None,
            }),
            Err(e) => {
                error_count += 1;
                previews.push(TrackPreview {
                    line_number,
                    name: truncate_name(line),
                    timestamp: INVALID_TIMESTAMP.to_string(),
                    is_valid: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    debug!(
        "Previewed {} lines, {} errors",
        total_lines, error_count
    );

    ParsePreview {
        tracks: previews,
        is_valid: error_count == 0 && total_lines > 0,
        error_count,
        total_lines,
    }
}
