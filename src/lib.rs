//! Bootlegger - Tracklist Parsing Core
//!
//! Template-driven tracklist parsing for splitting long audio recordings
//! into individual tracks. Pure and synchronous: no I/O, no shared state,
//! every call depends only on its own arguments.

pub mod error;
pub mod parse;
pub mod template;
pub mod timestamp;
pub mod track;
pub mod validate;

// Re-export main types for easy access
pub use crate::error::{Error, Result};
pub use crate::parse::parse_tracklist;
pub use crate::template::{
    parse_line, parse_tracklist_with_template, preview_parse, validate_template, ParsePreview,
    ParsedTrack, TemplateValidation, TrackPreview, DEFAULT_TEMPLATE,
};
pub use crate::timestamp::{
    format_seconds_to_timestamp, is_valid_timestamp, parse_timestamp_to_seconds,
};
pub use crate::track::Track;
pub use crate::validate::{is_valid_youtube_url, sanitize_filename};
