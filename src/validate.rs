//! Input validation utilities.

use regex::Regex;

const YOUTUBE_URL_PATTERN: &str =
    r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/|youtube\.com/live/)[\w\-]+";

const INVALID_FILENAME_CHARS: &str = r#"[<>:"/\\|?*\x00-\x1f]"#;

/// Check if a URL points at a YouTube video
pub fn is_valid_youtube_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    let pattern = Regex::new(YOUTUBE_URL_PATTERN).unwrap();
    pattern.is_match(url.trim())
}

/// Replace characters that are invalid in file names on common platforms.
///
/// Trailing dots and spaces are stripped as well; a name that sanitizes down
/// to nothing becomes "untitled".
pub fn sanitize_filename(name: &str) -> String {
    let pattern = Regex::new(INVALID_FILENAME_CHARS).unwrap();
    let sanitized = pattern.replace_all(name, "_");
    let sanitized = sanitized.trim_matches(|c| c == '.' || c == ' ');
    if sanitized.is_empty() {
        "untitled".to_string()
    } else {
        sanitized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_watch_url() {
        assert!(is_valid_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_valid_short_url() {
        assert!(is_valid_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_valid_live_url() {
        assert!(is_valid_youtube_url("youtube.com/live/abc123"));
    }

    #[test]
    fn test_valid_url_without_scheme() {
        assert!(is_valid_youtube_url("www.youtube.com/watch?v=abc-123"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_youtube_url(""));
        assert!(!is_valid_youtube_url("https://example.com/watch?v=abc"));
        assert!(!is_valid_youtube_url("not a url"));
    }

    #[test]
    fn test_sanitize_replaces_invalid_chars() {
        assert_eq!(sanitize_filename("My Song: Live/Remix?"), "My Song_ Live_Remix_");
    }

    #[test]
    fn test_sanitize_strips_trailing_dots_and_spaces() {
        assert_eq!(sanitize_filename("Track One. "), "Track One");
    }

    #[test]
    fn test_sanitize_empty_becomes_untitled() {
        assert_eq!(sanitize_filename("..."), "untitled");
        assert_eq!(sanitize_filename(""), "untitled");
    }

    #[test]
    fn test_sanitize_keeps_unicode() {
        assert_eq!(sanitize_filename("日本語の曲"), "日本語の曲");
    }
}
