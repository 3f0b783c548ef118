//! Template-based tracklist parsing.
//!
//! Templates mix literal text with placeholders describing one line's layout:
//!
//! - `%songname% - %mm%:%ss%`
//! - `%hh%:%mm%:%ss% - %songname%`
//! - `[%mm%:%ss%] %songname%`
//! - `%ignore:\d+\.% %songname% - %mm%:%ss%`
//!
//! Placeholders:
//! - `%songname%` - the song name (required)
//! - `%hh%` - hours (optional, 0 if not present)
//! - `%mm%` - minutes (required)
//! - `%ss%` - seconds (required)
//! - `%ignore:regex%` - match and discard a pattern (can be used multiple times)

pub mod compiler;
pub mod parser;
pub mod preview;

pub use parser::{parse_line, parse_tracklist_with_template, ParsedTrack};
pub use preview::{preview_parse, ParsePreview, TrackPreview};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default tracklist template
pub const DEFAULT_TEMPLATE: &str = "%songname% - %mm%:%ss%";

/// Standard placeholders and the capture patterns they compile to.
/// Minutes allow up to three digits to support long recordings.
pub(crate) const PLACEHOLDER_PATTERNS: [(&str, &str); 4] = [
    ("%songname%", r"(?P<songname>.+?)"),
    ("%hh%", r"(?P<hh>\d{1,2})"),
    ("%mm%", r"(?P<mm>\d{1,3})"),
    ("%ss%", r"(?P<ss>\d{2})"),
];

/// Placeholders every template must contain, in sorted order
pub(crate) const REQUIRED_PLACEHOLDERS: [&str; 3] = ["%mm%", "%songname%", "%ss%"];

/// Result of template validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateValidation {
    /// Whether the template can be used for parsing
    pub is_valid: bool,
    /// Human-readable description of the first problem found
    pub error: Option<String>,
    /// Required placeholders absent from the template
    pub missing_placeholders: Vec<String>,
}

impl TemplateValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            missing_placeholders: Vec::new(),
        }
    }

    fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            missing_placeholders: Vec::new(),
        }
    }
}

/// Validate a template string without parsing any tracklist text.
///
/// Never fails; every problem is reported through the returned
/// [`TemplateValidation`]. Checks run in order and stop at the first failure:
/// empty template, missing required placeholders (all reported together),
/// invalid `%ignore:...%` regexes, and finally full template compilation.
pub fn validate_template(template: &str) -> TemplateValidation {
    if template.trim().is_empty() {
        return TemplateValidation::invalid("Template cannot be empty");
    }

    let missing: Vec<String> = REQUIRED_PLACEHOLDERS
        .iter()
        .filter(|placeholder| !template.contains(*placeholder))
        .map(|placeholder| placeholder.to_string())
        .collect();

    if !missing.is_empty() {
        return TemplateValidation {
            is_valid: false,
            error: Some(format!(
                "Missing required placeholders: {}",
                missing.join(", ")
            )),
            missing_placeholders: missing,
        };
    }

    for (full_token, ignore_regex) in compiler::ignore_occurrences(template) {
        if let Err(e) = Regex::new(&ignore_regex) {
            return TemplateValidation::invalid(format!("Invalid regex in {full_token}: {e}"));
        }
    }

    if let Err(e) = compiler::compile_template(template) {
        return TemplateValidation::invalid(format!("Invalid template pattern: {e}"));
    }

    TemplateValidation::valid()
}
