//! Manifest parsing: `name｜url｜timestamp`, one track per line.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use thiserror::Error;

use super::model::Track;

/// Field separator: U+FF5C FULLWIDTH VERTICAL LINE, not the ASCII `|`.
pub const FIELD_SEPARATOR: char = '｜';

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Why a single manifest line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line {line}: expected 3 fields separated by '｜', found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: unrecognised timestamp {value:?}")]
    Timestamp { line: usize, value: String },
}

/// Result of parsing a manifest: the sorted tracks plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct ParsedManifest {
    pub tracks: Vec<Track>,
    pub skipped: Vec<LineError>,
}

/// Parse manifest text into tracks sorted newest first.
///
/// Blank lines are ignored. Malformed lines are collected in `skipped`
/// instead of aborting the whole manifest. Tracks with equal timestamps keep
/// their manifest order.
pub fn parse_manifest(text: &str) -> ParsedManifest {
    let mut parsed = ParsedManifest::default();

    for (i, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        match parse_line(i + 1, raw) {
            Ok(track) => parsed.tracks.push(track),
            Err(err) => parsed.skipped.push(err),
        }
    }

    // `sort_by` is stable.
    parsed
        .tracks
        .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    parsed
}

fn parse_line(line: usize, raw: &str) -> Result<Track, LineError> {
    let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [name, url, timestamp] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let timestamp = parse_timestamp(timestamp).ok_or_else(|| LineError::Timestamp {
        line,
        value: timestamp.to_string(),
    })?;

    Ok(Track {
        name: name.to_string(),
        url: url.to_string(),
        timestamp,
    })
}

/// Parse a manifest timestamp. Values without an offset are local time.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    localize(&Local, &naive)
}

/// Attach `tz` to a wall-clock time. Ambiguous times take the earlier
/// instant; times skipped by a forward transition move one hour later.
pub(super) fn localize<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(*naive + TimeDelta::hours(1)))
            .earliest(),
    }
}
