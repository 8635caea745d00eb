//! Timestamp token normalization.
//!
//! Transcript exports vary by locale: day and month order differs, years
//! come with 2 or 4 digits, the clock may be 12- or 24-hour, and different
//! clients separate the AM/PM marker with different invisible space
//! characters. No single format is reliable, so parsing is a prioritized
//! cascade of candidate formats — the first one that parses wins.
//!
//! The cascade cannot disambiguate genuinely ambiguous dates (`02/03/23`
//! is valid in both day-first and month-first locales); month-first is
//! simply tried first. This is the accepted policy, not a bug to fix.

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// 12-hour candidate formats, in priority order: month-first before
/// day-first, 2-digit year before 4-digit.
const TWELVE_HOUR_FORMATS: [&str; 4] = [
    "%m/%d/%y, %I:%M %p",
    "%d/%m/%y, %I:%M %p",
    "%m/%d/%Y, %I:%M %p",
    "%d/%m/%Y, %I:%M %p",
];

/// 24-hour candidates, same priority order.
const TWENTY_FOUR_HOUR_FORMATS: [&str; 4] = [
    "%m/%d/%y, %H:%M",
    "%d/%m/%y, %H:%M",
    "%m/%d/%Y, %H:%M",
    "%d/%m/%Y, %H:%M",
];

/// Normalizes a raw timestamp token for format parsing.
///
/// Replaces the narrow no-break space (U+202F) and no-break space (U+00A0)
/// with ordinary spaces, collapses whitespace runs, and strips the
/// ` - ` boundary residue from both ends.
pub fn normalize_token(raw: &str) -> String {
    let replaced = raw.replace(['\u{202f}', '\u{a0}'], " ");
    let collapsed = WHITESPACE_RUN.replace_all(&replaced, " ");
    collapsed.trim().trim_matches('-').trim().to_string()
}

/// Parses one timestamp token into a naive instant.
///
/// Applies [`normalize_token`], then tries the 12-hour cascade when the
/// token carries an AM/PM marker and the 24-hour cascade otherwise.
/// Returns `None` when every candidate format fails; the caller is
/// responsible for turning that into a fatal parse error.
pub fn parse_timestamp_token(raw: &str) -> Option<NaiveDateTime> {
    let token = normalize_token(raw);
    let upper = token.to_ascii_uppercase();

    if upper.contains("AM") || upper.contains("PM") {
        for format in TWELVE_HOUR_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(&upper, format) {
                return Some(parsed);
            }
        }
    }

    for format in TWENTY_FOUR_HOUR_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&token, format) {
            return Some(parsed);
        }
    }

    None
}
