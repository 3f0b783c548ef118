//! Strict template parsing: single lines and whole tracklists.

use regex::Captures;
use tracing::debug;

use super::compiler::compile_template;
use super::validate_template;
use crate::error::{Error, Result};
use crate::track::{chain_end_times, Track};

/// Result of parsing a single tracklist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTrack {
    /// Song name with surrounding whitespace trimmed
    pub name: String,
    /// Hours component (0 when the template has no `%hh%`)
    pub hours: u32,
    /// Minutes component
    pub minutes: u32,
    /// Seconds component
    pub seconds: u32,
    /// 1-based source line number, for diagnostics
    pub line_number: usize,
}

impl ParsedTrack {
    /// Total offset from the start of the recording, in whole seconds
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

fn time_component(captures: &Captures<'_>, group: &str, line_number: usize) -> Result<Option<u32>> {
    match captures.name(group) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| Error::Parse(format!("Line {line_number}: Invalid time format"))),
    }
}

/// Parse a single line using the template.
///
/// The line is trimmed before matching. Fails when the line does not match
/// the compiled template, the song name is empty, a time component is not an
/// integer, or the seconds value is 60 or more.
pub fn parse_line(line: &str, template: &str, line_number: usize) -> Result<ParsedTrack> {
    let pattern = compile_template(template)
        .map_err(|e| Error::Validation(format!("Invalid template pattern: {e}")))?;

    let captures = pattern.captures(line.trim()).ok_or_else(|| {
        Error::Parse(format!("Line {line_number}: Does not match template format"))
    })?;

    let name = captures
        .name("songname")
        .map(|m| m.as_str().trim())
        .unwrap_or("");
    if name.is_empty() {
        return Err(Error::Parse(format!("Line {line_number}: Song name is empty")));
    }

    let hours = time_component(&captures, "hh", line_number)?.unwrap_or(0);
    let minutes = time_component(&captures, "mm", line_number)?
        .ok_or_else(|| Error::Parse(format!("Line {line_number}: Invalid time format")))?;
    let seconds = time_component(&captures, "ss", line_number)?
        .ok_or_else(|| Error::Parse(format!("Line {line_number}: Invalid time format")))?;

    if seconds >= 60 {
        return Err(Error::Parse(format!(
            "Line {line_number}: Seconds must be less than 60 (got {seconds})"
        )));
    }

    // Minutes above 59 stay legal even alongside %hh%: raw minute counts are
    // common in tracklists for long recordings.

    Ok(ParsedTrack {
        name: name.to_string(),
        hours,
        minutes,
        seconds,
        line_number,
    })
}

/// Parse tracklist text using a template, producing [`Track`]s with
/// calculated end times.
///
/// All-or-nothing: every malformed line is collected and reported together
/// in one error so the user can fix the whole tracklist in a single pass.
/// Output is sorted by start time; the last track's end time is left open.
pub fn parse_tracklist_with_template(text: &str, template: &str) -> Result<Vec<Track>> {
    let validation = validate_template(template);
    if !validation.is_valid {
        let reason = validation.error.unwrap_or_default();
        return Err(Error::Validation(format!("Invalid template: {reason}")));
    }

    if text.trim().is_empty() {
        return Err(Error::Parse("Tracklist is empty".to_string()));
    }

    let mut parsed_tracks: Vec<ParsedTrack> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for (i, raw_line) in text.trim().lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line, template, i + 1) {
            Ok(parsed) => parsed_tracks.push(parsed),
            Err(e) => errors.push(e.to_string()),
        }
    }

    if !errors.is_empty() {
        return Err(Error::Parse(errors.join("\n")));
    }

    if parsed_tracks.is_empty() {
        return Err(Error::Parse("No valid tracks found in tracklist".to_string()));
    }

    parsed_tracks.sort_by_key(ParsedTrack::total_seconds);

    debug!(
        "Parsed {} tracks with template '{}'",
        parsed_tracks.len(),
        template
    );

    let tracks = parsed_tracks
        .iter()
        .map(|parsed| Track::new(parsed.name.clone(), f64::from(parsed.total_seconds())))
        .collect();

    Ok(chain_end_times(tracks))
}
