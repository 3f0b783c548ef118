//! Time format conversion utilities.

use regex::Regex;

use crate::error::{Error, Result};

/// Convert `mm:ss` or `hh:mm:ss` to seconds
pub fn parse_timestamp_to_seconds(timestamp: &str) -> Result<f64> {
    let parts: Vec<&str> = timestamp.trim().split(':').collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [minutes, seconds] => ("0", *minutes, *seconds),
        [hours, minutes, seconds] => (*hours, *minutes, *seconds),
        _ => {
            return Err(Error::Validation(format!(
                "Invalid timestamp format: {timestamp}"
            )))
        }
    };

    let invalid = || Error::Validation(format!("Invalid timestamp format: {timestamp}"));
    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.parse().map_err(|_| invalid())?;

    Ok((hours * 3600 + minutes * 60 + seconds) as f64)
}

/// Convert seconds to `HH:MM:SS.mmm` format suitable for encoder seek arguments
pub fn format_seconds_to_timestamp(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;
    format!("{hours:02}:{minutes:02}:{secs:06.3}")
}

/// Format time components for display: `H:MM:SS` when hours are present,
/// otherwise `M:SS` with unpadded minutes
pub fn format_display_timestamp(hours: u32, minutes: u32, seconds: u32) -> String {
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Check if a timestamp is in valid `mm:ss` or `hh:mm:ss` format
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    let pattern = Regex::new(r"^(\d+:)?\d{1,2}:\d{2}$").unwrap();
    pattern.is_match(timestamp.trim())
}
