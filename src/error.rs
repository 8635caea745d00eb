//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Parse errors are fatal**: a transcript that fails to tokenize or
//!   date-parse never produces a partial record collection
//! - **Aggregation never fails hard**: an empty corpus yields an empty
//!   table or `None`, not an error

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RecordCollection;
///
/// fn my_function() -> Result<RecordCollection> {
///     chatlens::parse_transcript("1/1/23, 10:00 AM - Alice: Hello")
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// Every variant is fatal for the upload being processed: the parser either
/// produces a complete [`RecordCollection`](crate::RecordCollection) or one
/// of these. Soft degradations (missing stop-word file, empty cleaned
/// corpus) are not errors; they surface as fallback values in the
/// aggregation results instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    ///
    /// Transcript exports are expected to be UTF-8 encoded text.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// No timestamp boundary was found anywhere in the input.
    ///
    /// The file is not a recognized transcript export (or is empty).
    #[error(
        "no message boundaries found: the file does not look like a chat \
         transcript export ({detail})"
    )]
    UnrecognizedTranscript {
        /// What was inspected, e.g. input length
        detail: String,
    },

    /// The tokenizer's chunk count disagrees with its timestamp count.
    ///
    /// Indicates the input is structurally not a transcript export.
    #[error("mismatch between messages ({chunks}) and dates ({stamps})")]
    StructuralMismatch {
        /// Number of message chunks discovered
        chunks: usize,
        /// Number of timestamp tokens discovered
        stamps: usize,
    },

    /// A timestamp token matched none of the candidate formats.
    ///
    /// Carries the offending token plus a few sample tokens from the
    /// transcript for diagnosis.
    #[error(
        "no matching date format for: {token:?}{}",
        format_samples(samples)
    )]
    UnparseableTimestamp {
        /// The raw token that failed every candidate format
        token: String,
        /// Up to five raw tokens from the same transcript
        samples: Vec<String>,
    },
}

fn format_samples(samples: &[String]) -> String {
    if samples.is_empty() {
        String::new()
    } else {
        format!(
            "\nfirst few dates:\n{}",
            samples
                .iter()
                .map(|s| format!("  {s:?}"))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "transcript decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unrecognized-transcript error.
    pub fn unrecognized(detail: impl Into<String>) -> Self {
        ChatlensError::UnrecognizedTranscript {
            detail: detail.into(),
        }
    }

    /// Creates a structural mismatch error from the two counts.
    pub fn mismatch(chunks: usize, stamps: usize) -> Self {
        ChatlensError::StructuralMismatch { chunks, stamps }
    }

    /// Creates an unparseable-timestamp error.
    pub fn bad_timestamp(token: impl Into<String>, samples: Vec<String>) -> Self {
        ChatlensError::UnparseableTimestamp {
            token: token.into(),
            samples,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a parse-structure error
    /// (unrecognized transcript or chunk/timestamp mismatch).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ChatlensError::UnrecognizedTranscript { .. } | ChatlensError::StructuralMismatch { .. }
        )
    }

    /// Returns `true` if this is a timestamp parse error.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, ChatlensError::UnparseableTimestamp { .. })
    }
}
