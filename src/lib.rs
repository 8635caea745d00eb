//! # Chatlens
//!
//! A Rust library for turning exported chat transcripts into descriptive
//! analytics: message/word/media/link counts, temporal activity
//! distributions, word and emoji frequency tables, and a most-active-user
//! ranking.
//!
//! ## Overview
//!
//! The core is the transcript parser: a loosely-delimited text blob —
//! interleaved timestamp prefixes and message chunks, with locale-dependent
//! date formats and no formal grammar — becomes an ordered, immutable
//! collection of typed records. Everything downstream is pure functions
//! over that collection.
//!
//! The pipeline:
//!
//! 1. **Tokenize** — split the blob on the timestamp boundary pattern
//! 2. **Normalize** — parse each timestamp through a prioritized cascade
//!    of locale candidates
//! 3. **Classify** — split each chunk into author and body, or mark it a
//!    system notification
//! 4. **Aggregate** — answer independent queries over the records,
//!    optionally filtered to one author
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::analysis::{Analyzer, UserFilter};
//! use chatlens::parse_transcript;
//!
//! fn main() -> chatlens::Result<()> {
//!     let records = parse_transcript(
//!         "1/1/23, 10:00 AM - Alice: Hello!\n1/1/23, 10:05 AM - Bob: Hi Alice",
//!     )?;
//!
//!     let analyzer = Analyzer::new(records);
//!     let stats = analyzer.fetch_stats(&UserFilter::Overall);
//!     assert_eq!(stats.messages, 2);
//!
//!     let busy = analyzer.most_busy_users();
//!     assert_eq!(busy.top.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — tokenizer, timestamp normalizer, chunk classifier, and
//!   the [`parse_transcript`]/[`parse_file`] entry points
//! - [`record`] — [`Record`], [`Author`], [`RecordCollection`]
//! - [`analysis`] — [`Analyzer`](analysis::Analyzer),
//!   [`UserFilter`](analysis::UserFilter), and the aggregate tables
//! - [`lookup`] — injectable collaborators: link detector, emoji
//!   classifier, stop-word set
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod analysis;
pub mod error;
pub mod lookup;
pub mod parsing;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parsing::{parse_file, parse_transcript};
pub use record::{Author, Record, RecordCollection};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record types
    pub use crate::record::{Author, GROUP_NOTIFICATION, Record, RecordCollection};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing entry points
    pub use crate::parsing::{parse_file, parse_transcript};

    // Analysis
    pub use crate::analysis::{
        ActivityHeatmap, Analyzer, BusyUsers, ChatStats, DailyActivity, EmojiCount, LabelCount,
        MEDIA_PLACEHOLDER, MonthlyActivity, Report, UserFilter, UserShare, WordCloudInput,
    };

    // Lookup collaborators
    pub use crate::lookup::{
        DEFAULT_STOPWORD_FILE, EmojiClassifier, LinkDetector, RegexLinkDetector, StopwordOrigin,
        Stopwords, UnicodeEmojiClassifier,
    };
}
