//! Compiles template strings into anchored line-matching regexes.

use regex::Regex;

use super::PLACEHOLDER_PATTERNS;

/// Matches `%ignore:<regex>%` tokens inside a template. Non-greedy, so the
/// inner regex runs up to the first following `%`.
const IGNORE_TOKEN_PATTERN: &str = r"%ignore:(.+?)%";

/// Find every `%ignore:...%` occurrence in a template.
///
/// Returns `(full token, inner regex)` pairs, e.g.
/// `("%ignore:\d+\.%", "\d+\.")`.
pub(crate) fn ignore_occurrences(template: &str) -> Vec<(String, String)> {
    let ignore_token = Regex::new(IGNORE_TOKEN_PATTERN).unwrap();
    ignore_token
        .captures_iter(template)
        .map(|captures| (captures[0].to_string(), captures[1].to_string()))
        .collect()
}

/// Compile a template string into a regex matching one full line.
///
/// The template is escaped as literal text first, then the escaped forms of
/// the placeholder tokens are spliced out for their capture patterns. Ignore
/// tokens are substituted last, each becoming a non-capturing group wrapping
/// the user's regex verbatim. Substituting on escaped representations keeps
/// literal decoration characters (brackets, dots) from being misread as
/// regex syntax.
pub fn compile_template(template: &str) -> Result<Regex, regex::Error> {
    let ignore_replacements: Vec<(String, String)> = ignore_occurrences(template)
        .into_iter()
        .map(|(full_token, inner_regex)| {
            (regex::escape(&full_token), format!("(?:{inner_regex})"))
        })
        .collect();

    let mut pattern = regex::escape(template);

    for (placeholder, capture_pattern) in PLACEHOLDER_PATTERNS {
        pattern = pattern.replace(&regex::escape(placeholder), capture_pattern);
    }

    for (escaped_token, replacement) in &ignore_replacements {
        pattern = pattern.replace(escaped_token, replacement);
    }

    Regex::new(&format!("^{pattern}$"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::DEFAULT_TEMPLATE;

    #[test]
    fn test_compile_default_template() {
        let pattern = compile_template(DEFAULT_TEMPLATE).unwrap();
        let captures = pattern.captures("My Song - 3:45").unwrap();
        assert_eq!(&captures["songname"], "My Song");
        assert_eq!(&captures["mm"], "3");
        assert_eq!(&captures["ss"], "45");
    }

    #[test]
    fn test_compile_anchors_whole_line() {
        let pattern = compile_template(DEFAULT_TEMPLATE).unwrap();
        assert!(!pattern.is_match("prefix My Song - 3:45 suffix garbage :"));
    }

    #[test]
    fn test_literal_brackets_are_escaped() {
        let pattern = compile_template("[%mm%:%ss%] %songname%").unwrap();
        assert!(pattern.is_match("[12:00] Opening Act"));
        assert!(!pattern.is_match("12:00 Opening Act"));
    }

    #[test]
    fn test_hours_capture_optional() {
        let pattern = compile_template("%songname% - %hh%:%mm%:%ss%").unwrap();
        let captures = pattern.captures("Long Song - 1:23:45").unwrap();
        assert_eq!(&captures["hh"], "1");
    }

    #[test]
    fn test_ignore_occurrences_extraction() {
        let occurrences = ignore_occurrences(r"%ignore:\d+\.% %songname% - %mm%:%ss%");
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].0, r"%ignore:\d+\.%");
        assert_eq!(occurrences[0].1, r"\d+\.");
    }

    #[test]
    fn test_multiple_ignore_occurrences() {
        let occurrences =
            ignore_occurrences(r"%ignore:\d+\.% %songname% - %mm%:%ss%%ignore:\s*\[.*\]%");
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[1].1, r"\s*\[.*\]");
    }

    #[test]
    fn test_ignore_regex_spliced_unescaped() {
        let pattern = compile_template(r"%ignore:\d+\.% %songname% - %mm%:%ss%").unwrap();
        assert!(pattern.is_match("1. My Song - 3:45"));
        assert!(pattern.is_match("10. X - 5:30"));
        assert!(!pattern.is_match(". My Song - 3:45"));
    }

    #[test]
    fn test_ignore_next_to_literal_brackets() {
        // Literal text elsewhere in the template must survive the splice
        let pattern = compile_template(r"%ignore:\d+\.% [%songname%] - %mm%:%ss%").unwrap();
        let captures = pattern.captures("1. [Cool Track] - 1:30").unwrap();
        assert_eq!(&captures["songname"], "Cool Track");
    }

    #[test]
    fn test_invalid_ignore_regex_fails_compilation() {
        assert!(compile_template(r"%ignore:[unclosed% %songname% - %mm%:%ss%").is_err());
    }
}
