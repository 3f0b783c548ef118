use serde::{Deserialize, Serialize};

/// Represents a single track to extract from a longer recording
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Track name
    pub name: String,
    /// Start time in seconds from the beginning of the recording
    pub start_seconds: f64,
    /// End time in seconds (None means the track runs to the end of the source)
    pub end_seconds: Option<f64>,
}

impl Track {
    /// Create a new track with an open end time
    pub fn new(name: impl Into<String>, start_seconds: f64) -> Self {
        Self {
            name: name.into(),
            start_seconds,
            end_seconds: None,
        }
    }

    /// Track duration in seconds, if the end time is known
    pub fn duration(&self) -> Option<f64> {
        self.end_seconds.map(|end| end - self.start_seconds)
    }

    /// Return a copy of this track with the given end time
    pub fn with_end_time(&self, end_seconds: f64) -> Self {
        Self {
            name: self.name.clone(),
            start_seconds: self.start_seconds,
            end_seconds: Some(end_seconds),
        }
    }
}

/// Set each track's end time to the next track's start time.
///
/// Expects tracks already sorted by start time. The last track keeps an open
/// end time, meaning "until the source recording ends".
pub(crate) fn chain_end_times(tracks: Vec<Track>) -> Vec<Track> {
    let mut chained = Vec::with_capacity(tracks.len());
    for i in 0..tracks.len() {
        if i + 1 < tracks.len() {
            let end = tracks[i + 1].start_seconds;
            chained.push(tracks[i].with_end_time(end));
        } else {
            chained.push(tracks[i].clone());
        }
    }
    chained
}
