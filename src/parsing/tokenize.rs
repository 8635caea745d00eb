//! Transcript tokenizer.
//!
//! Splits the raw transcript blob into two equal-length, ordered sequences:
//! timestamp tokens (the `3/14/21, 9:05 PM - ` prefixes) and message chunks
//! (everything between one prefix and the next). Downstream components
//! consume the pairs; the boundary text itself is the only input that is
//! discarded.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ChatlensError, Result};

lazy_static! {
    /// Message boundary: `M/D/YY[YY], H:MM [AM|PM] - ` with 1–2 digit month,
    /// day and hour, 2- or 4-digit year, and an optional case-insensitive
    /// 12-hour marker. `\s` is Unicode-aware, so the narrow no-break space
    /// some exports place before AM/PM matches too.
    static ref BOUNDARY_RE: Regex =
        Regex::new(r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s*(?:[AaPp][Mm])?\s*-\s*").unwrap();
}

/// The tokenizer's output: parallel sequences of timestamp tokens and
/// message chunks, in input order.
#[derive(Debug)]
pub struct TokenizedTranscript<'a> {
    stamps: Vec<&'a str>,
    chunks: Vec<&'a str>,
}

impl<'a> TokenizedTranscript<'a> {
    /// Number of (timestamp, chunk) pairs.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Returns `true` if no boundaries were found.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// The raw timestamp tokens, in input order.
    pub fn stamps(&self) -> &[&'a str] {
        &self.stamps
    }

    /// The raw message chunks, in input order.
    pub fn chunks(&self) -> &[&'a str] {
        &self.chunks
    }

    /// Iterates `(timestamp token, message chunk)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.stamps.iter().copied().zip(self.chunks.iter().copied())
    }
}

/// Splits a raw transcript into timestamp tokens and message chunks.
///
/// The text before the first boundary is discarded (transcripts begin with
/// a timestamp). Each chunk is the text between one boundary match and the
/// next, the last chunk running to end of input.
///
/// # Errors
///
/// - [`ChatlensError::UnrecognizedTranscript`] if no boundary matches at all
/// - [`ChatlensError::StructuralMismatch`] if the chunk and timestamp
///   counts disagree
pub fn tokenize(text: &str) -> Result<TokenizedTranscript<'_>> {
    let mut stamps = Vec::new();
    let mut chunks = Vec::new();
    let mut last_end: Option<usize> = None;

    for mat in BOUNDARY_RE.find_iter(text) {
        if let Some(end) = last_end {
            chunks.push(&text[end..mat.start()]);
        }
        stamps.push(mat.as_str());
        last_end = Some(mat.end());
    }

    match last_end {
        None => {
            return Err(ChatlensError::unrecognized(format!(
                "scanned {} bytes",
                text.len()
            )));
        }
        Some(end) => chunks.push(&text[end..]),
    }

    if chunks.len() != stamps.len() {
        return Err(ChatlensError::mismatch(chunks.len(), stamps.len()));
    }

    Ok(TokenizedTranscript { stamps, chunks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message() {
        let tokens = tokenize("1/1/23, 10:00 AM - Alice: Hello").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.stamps()[0], "1/1/23, 10:00 AM - ");
        assert_eq!(tokens.chunks()[0], "Alice: Hello");
    }

    #[test]
    fn test_multiple_messages() {
        let input = "1/1/23, 10:00 AM - Alice: Hello\n1/1/23, 10:05 AM - Bob: Hi\n";
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.chunks()[0], "Alice: Hello\n");
        assert_eq!(tokens.chunks()[1], "Bob: Hi\n");
    }

    #[test]
    fn test_multiline_chunk_stays_one_message() {
        let input = "1/1/23, 10:00 AM - Alice: Hello\nstill the same message\n1/1/23, 10:05 AM - Bob: Hi";
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.chunks()[0].contains("still the same message"));
    }

    #[test]
    fn test_24_hour_boundary() {
        let tokens = tokenize("15/1/2024, 22:30 - Alice: late").unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_narrow_no_break_space_before_marker() {
        // U+202F between time and AM, as iOS exports produce
        let tokens = tokenize("1/1/23, 10:00\u{202f}AM - Alice: Hello").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.chunks()[0], "Alice: Hello");
    }

    #[test]
    fn test_leading_text_discarded() {
        let input = "export header line\n1/1/23, 10:00 AM - Alice: Hello";
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.chunks()[0], "Alice: Hello");
    }

    #[test]
    fn test_no_boundaries_is_error() {
        let err = tokenize("just some prose with no timestamps").unwrap_err();
        assert!(err.is_structural());
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(tokenize("").unwrap_err().is_structural());
    }

    #[test]
    fn test_timestamp_like_text_inside_body_splits() {
        // A body containing a full boundary pattern is indistinguishable
        // from a real boundary; the tokenizer takes it as one.
        let input = "1/1/23, 10:00 AM - Alice: see 2/2/23, 11:00 AM - for details";
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens.len(), 2);
    }
}
