//! Fixed-format tracklist parsing.
//!
//! Parses the built-in `Song Name - mm:ss` / `Song Name - hh:mm:ss` layout
//! without a user template. For custom layouts see [`crate::template`].

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::timestamp::{is_valid_timestamp, parse_timestamp_to_seconds};
use crate::track::{chain_end_times, Track};

const TRACK_LINE_PATTERN: &str = r"^(.+?)\s*-\s*(\d+:?\d*:\d{2})$";

/// Parse tracklist text into [`Track`]s with calculated end times.
///
/// Lines are expected in the form `songName - mm:ss` or `songName - hh:mm:ss`,
/// one track per line. Blank lines are skipped. All malformed lines are
/// reported together in a single error.
pub fn parse_tracklist(text: &str) -> Result<Vec<Track>> {
    if text.trim().is_empty() {
        return Err(Error::Parse("Tracklist is empty".to_string()));
    }

    let line_pattern = Regex::new(TRACK_LINE_PATTERN).unwrap();

    let mut tracks: Vec<Track> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for (i, raw_line) in text.trim().lines().enumerate() {
        let line_number = i + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(captures) = line_pattern.captures(line) else {
            errors.push(format!(
                "Line {line_number}: Invalid format. Expected 'Song Name - mm:ss'"
            ));
            continue;
        };

        let name = captures[1].trim();
        let timestamp = captures[2].trim();

        if !is_valid_timestamp(timestamp) {
            errors.push(format!("Line {line_number}: Invalid timestamp '{timestamp}'"));
            continue;
        }

        match parse_timestamp_to_seconds(timestamp) {
            Ok(start_seconds) => tracks.push(Track::new(name, start_seconds)),
            Err(_) => {
                errors.push(format!(
                    "Line {line_number}: Could not parse timestamp '{timestamp}'"
                ));
            }
        }
    }

    if !errors.is_empty() {
        return Err(Error::Parse(errors.join("\n")));
    }

    if tracks.is_empty() {
        return Err(Error::Parse("No valid tracks found in tracklist".to_string()));
    }

    tracks.sort_by(|a, b| {
        a.start_seconds
            .partial_cmp(&b.start_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!("Parsed {} tracks from fixed-format tracklist", tracks.len());

    Ok(chain_end_times(tracks))
}
