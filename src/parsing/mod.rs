//! Transcript parsing pipeline.
//!
//! One-shot, stateless transformation from a raw export blob to a
//! [`RecordCollection`]: tokenize into (timestamp, chunk) pairs, normalize
//! each timestamp through the locale cascade, classify each chunk into
//! author and body. Any failure aborts the whole parse — a partial record
//! collection is never produced.
//!
//! # Example
//!
//! ```
//! use chatlens::parse_transcript;
//!
//! let records = parse_transcript("1/1/23, 10:00 AM - Alice: Hello")?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].author.name(), "Alice");
//! assert_eq!(records[0].body, "Hello");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod classify;
pub mod timestamp;
pub mod tokenize;

use std::fs;
use std::path::Path;

use crate::error::{ChatlensError, Result};
use crate::record::{Record, RecordCollection};

pub use classify::classify_chunk;
pub use timestamp::{normalize_token, parse_timestamp_token};
pub use tokenize::{TokenizedTranscript, tokenize};

/// How many raw tokens an [`ChatlensError::UnparseableTimestamp`] carries
/// for diagnosis.
const ERROR_SAMPLE_COUNT: usize = 5;

/// Parses a full transcript blob into an ordered record collection.
///
/// The number of records always equals the number of timestamp boundaries
/// found in the input, in input order. Records are not re-sorted; the
/// parser trusts export order.
///
/// # Errors
///
/// - [`ChatlensError::UnrecognizedTranscript`] — no timestamp boundary found
/// - [`ChatlensError::StructuralMismatch`] — token/chunk counts disagree
/// - [`ChatlensError::UnparseableTimestamp`] — a timestamp matched no
///   candidate format; the error carries the offending token and up to
///   five sample tokens
pub fn parse_transcript(text: &str) -> Result<RecordCollection> {
    let tokens = tokenize(text)?;

    let mut records = Vec::with_capacity(tokens.len());
    for (stamp, chunk) in tokens.pairs() {
        let timestamp = parse_timestamp_token(stamp).ok_or_else(|| {
            let samples = tokens
                .stamps()
                .iter()
                .take(ERROR_SAMPLE_COUNT)
                .map(|s| s.trim().to_string())
                .collect();
            ChatlensError::bad_timestamp(stamp.trim(), samples)
        })?;

        let (author, body) = classify_chunk(chunk);
        records.push(Record::new(timestamp, author, body));
    }

    Ok(RecordCollection::new(records))
}

/// Reads a transcript file and parses it.
///
/// The file is read as raw bytes and decoded as UTF-8, mirroring an
/// uploaded blob; invalid UTF-8 is a [`ChatlensError::Utf8`] error rather
/// than a lossy decode.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RecordCollection> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    parse_transcript(&text)
}
