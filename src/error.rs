use thiserror::Error;

/// Errors produced by tracklist parsing and validation
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation failed
    #[error("{0}")]
    Validation(String),

    /// Tracklist parsing failed
    #[error("{0}")]
    Parse(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_bare_message() {
        let err = Error::Parse("Line 3: Does not match template format".to_string());
        assert_eq!(err.to_string(), "Line 3: Does not match template format");
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::Validation("Template cannot be empty".to_string());
        assert_eq!(err.to_string(), "Template cannot be empty");
    }
}
