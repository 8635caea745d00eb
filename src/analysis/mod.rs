//! Aggregate analytics over a parsed record collection.
//!
//! [`Analyzer`] owns one immutable [`RecordCollection`] plus its lookup
//! collaborators and answers independent, side-effect-free queries over it:
//! counts, time-bucketed groupings, frequency tables. Every query takes a
//! [`UserFilter`] and recomputes from scratch — there is no caching and no
//! shared mutable state, so queries may run in any order (or, if a caller
//! wants, in parallel).
//!
//! # Example
//!
//! ```
//! use chatlens::analysis::{Analyzer, UserFilter};
//! use chatlens::parse_transcript;
//!
//! let records = parse_transcript("1/1/23, 10:00 AM - Alice: Hello world")?;
//! let analyzer = Analyzer::new(records);
//!
//! let stats = analyzer.fetch_stats(&UserFilter::Overall);
//! assert_eq!(stats.messages, 1);
//! assert_eq!(stats.words, 2);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod stats;
pub mod text;
pub mod timeline;

use serde::{Deserialize, Serialize};

use crate::lookup::{
    EmojiClassifier, LinkDetector, RegexLinkDetector, Stopwords, UnicodeEmojiClassifier,
};
use crate::record::{Record, RecordCollection};

pub use stats::{BusyUsers, ChatStats, UserShare};
pub use text::{EmojiCount, WordCloudInput};
pub use timeline::{ActivityHeatmap, DailyActivity, MonthlyActivity};

/// Body text WhatsApp substitutes for attachments in media-less exports.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Selects which author's records a query covers.
///
/// `Overall` keeps everything, notifications included; `Named` keeps only
/// records whose author name matches exactly (the notification sentinel is
/// a valid name here, like any other).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserFilter {
    /// All records.
    #[default]
    Overall,
    /// Records from one author.
    Named(String),
}

impl UserFilter {
    /// Creates a named filter.
    pub fn named(name: impl Into<String>) -> Self {
        UserFilter::Named(name.into())
    }

    /// Returns `true` if this filter keeps everything.
    pub fn is_overall(&self) -> bool {
        matches!(self, UserFilter::Overall)
    }

    /// Returns `true` if the record passes the filter.
    pub fn accepts(&self, record: &Record) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::Named(name) => record.author.name() == name,
        }
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserFilter::Overall => f.write_str("Overall"),
            UserFilter::Named(name) => f.write_str(name),
        }
    }
}

impl From<Option<String>> for UserFilter {
    fn from(name: Option<String>) -> Self {
        name.map_or(UserFilter::Overall, UserFilter::Named)
    }
}

/// A `(label, count)` table row, used by the frequency and activity tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    /// Group label: a word, an author name, a day or month name.
    pub label: String,
    /// Number of records (or occurrences) in the group.
    pub count: usize,
}

impl LabelCount {
    pub(crate) fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Analytics engine over one parsed transcript.
///
/// Construction wires in the lookup collaborators with their defaults
/// (pattern link detector, Unicode emoji classifier, stop-words from the
/// bundled file with built-in fallback); builder methods substitute
/// alternatives, which is also how tests inject fakes.
pub struct Analyzer {
    records: RecordCollection,
    links: Box<dyn LinkDetector>,
    emoji: Box<dyn EmojiClassifier>,
    stopwords: Stopwords,
}

impl Analyzer {
    /// Creates an analyzer with default collaborators.
    ///
    /// Stop-words come from [`Stopwords::load_default`] — the one external
    /// read this layer performs, soft-failing to the built-in set.
    pub fn new(records: RecordCollection) -> Self {
        Self {
            records,
            links: Box::new(RegexLinkDetector),
            emoji: Box::new(UnicodeEmojiClassifier),
            stopwords: Stopwords::load_default(),
        }
    }

    /// Replaces the stop-word set.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replaces the link detector.
    #[must_use]
    pub fn with_link_detector(mut self, links: impl LinkDetector + 'static) -> Self {
        self.links = Box::new(links);
        self
    }

    /// Replaces the emoji classifier.
    #[must_use]
    pub fn with_emoji_classifier(mut self, emoji: impl EmojiClassifier + 'static) -> Self {
        self.emoji = Box::new(emoji);
        self
    }

    /// The analyzed record collection.
    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    /// The active stop-word set.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub(crate) fn link_detector(&self) -> &dyn LinkDetector {
        self.links.as_ref()
    }

    pub(crate) fn emoji_classifier(&self) -> &dyn EmojiClassifier {
        self.emoji.as_ref()
    }

    /// Records passing the filter, in input order.
    pub(crate) fn filtered<'a>(
        &'a self,
        filter: &'a UserFilter,
    ) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| filter.accepts(r))
    }

    /// Computes every table the presentation layer renders for one filter.
    ///
    /// Failures of individual aggregations are impossible by construction
    /// (each degrades to an empty table or `None`), so the report is total.
    pub fn report(&self, filter: &UserFilter) -> Report {
        Report {
            filter: filter.to_string(),
            stats: self.fetch_stats(filter),
            busy_users: if filter.is_overall() {
                Some(self.most_busy_users())
            } else {
                None
            },
            monthly_timeline: self.monthly_timeline(filter),
            daily_timeline: self.daily_timeline(filter),
            week_activity: self.week_activity_map(filter),
            month_activity: self.month_activity_map(filter),
            heatmap: self.activity_heatmap(filter),
            common_words: self.common_words(filter),
            word_cloud: self.word_cloud_input(filter),
            emoji: self.emoji_frequency(filter),
        }
    }
}

/// Every aggregation result for one filter, in one place.
///
/// This is the batch the presentation layer consumes after "start
/// analysis": scalar stats, the timelines, activity maps, the heatmap
/// grid, and the frequency tables. Serializable as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// The filter the report was computed under (`"Overall"` or a name).
    pub filter: String,
    /// Scalar counters.
    pub stats: ChatStats,
    /// Ranking and share table; present only for `Overall` reports.
    pub busy_users: Option<BusyUsers>,
    /// Messages per (year, month), ascending.
    pub monthly_timeline: Vec<MonthlyActivity>,
    /// Messages per calendar date, ascending.
    pub daily_timeline: Vec<DailyActivity>,
    /// Messages per day-of-week, descending.
    pub week_activity: Vec<LabelCount>,
    /// Messages per month name, descending.
    pub month_activity: Vec<LabelCount>,
    /// Complete 7×24 day/period grid.
    pub heatmap: ActivityHeatmap,
    /// Top-20 cleaned words.
    pub common_words: Vec<LabelCount>,
    /// Cleaned corpus for an external word-cloud renderer, if non-empty.
    pub word_cloud: Option<WordCloudInput>,
    /// Emoji frequency table, descending.
    pub emoji: Vec<EmojiCount>,
}

#[cfg(feature = "json-report")]
impl Report {
    /// Serializes the full report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
