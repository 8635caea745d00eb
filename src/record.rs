//! Structured transcript records.
//!
//! This module provides [`Record`], the normalized representation of one
//! timestamped transcript entry, and [`RecordCollection`], the ordered,
//! immutable sequence the parser hands to the analysis layer.
//!
//! # Overview
//!
//! A record consists of:
//! - `timestamp` — the naive local instant of the export (minute precision)
//! - `author` — a named user or the group-notification sentinel
//! - `body` — the trimmed message text, author prefix stripped
//!
//! Calendar fields (month name, day-of-week, hour bucket) are not stored;
//! they are pure functions of `timestamp` exposed as accessor methods.
//!
//! # Examples
//!
//! ```
//! use chatlens::record::{Author, Record};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let rec = Record::new(ts, Author::user("Alice"), "Hello");
//!
//! assert_eq!(rec.month_name(), "January");
//! assert_eq!(rec.day_name(), "Sunday");
//! assert_eq!(rec.period(), "10-11");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Sentinel author name used for system notifications.
///
/// Lines with no `name: ` prefix (joins, leaves, subject changes,
/// encryption notices) carry this value in user-facing tables.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// The author of a transcript record.
///
/// Either a named user or the system (a group notification with no human
/// author). The sentinel string [`GROUP_NOTIFICATION`] is how the system
/// author appears in every user-facing table, so [`Author::name`] and the
/// `Display` impl both yield it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// A named chat participant.
    User(String),
    /// A system-generated notification; no human author.
    System,
}

impl Author {
    /// Creates a user author, trimming surrounding whitespace.
    pub fn user(name: impl Into<String>) -> Self {
        Author::User(name.into().trim().to_string())
    }

    /// Returns the display name: the user name, or the
    /// [`GROUP_NOTIFICATION`] sentinel for system records.
    pub fn name(&self) -> &str {
        match self {
            Author::User(name) => name,
            Author::System => GROUP_NOTIFICATION,
        }
    }

    /// Returns `true` for system notifications.
    pub fn is_system(&self) -> bool {
        matches!(self, Author::System)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One structured, timestamped message or notification.
///
/// Records are produced by the parser in input order and never mutated
/// afterwards. All calendar/time fields are derived on demand from
/// `timestamp`; two records may share an identical timestamp (exports have
/// minute precision) and still remain distinct entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Naive local instant of the export (no timezone).
    pub timestamp: NaiveDateTime,

    /// The message author, or the notification sentinel.
    pub author: Author,

    /// Trimmed message text with any `author: ` prefix stripped.
    pub body: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(timestamp: NaiveDateTime, author: Author, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            author,
            body: body.into(),
        }
    }

    // =========================================================================
    // Derived calendar fields (pure functions of `timestamp`)
    // =========================================================================

    /// Calendar date of the record.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Four-digit year.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Numeric month, 1–12.
    pub fn month_num(&self) -> u32 {
        self.timestamp.month()
    }

    /// Full English month name.
    pub fn month_name(&self) -> &'static str {
        month_name(self.timestamp.month())
    }

    /// Day of the month, 1–31.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    /// Full English day-of-week name.
    pub fn day_name(&self) -> &'static str {
        day_name(self.timestamp.weekday())
    }

    /// Hour of the day, 0–23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Minute of the hour, 0–59.
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// One-hour bucket label for heatmap grouping.
    ///
    /// `"{hour}-{hour+1}"`, except hour 23 wraps to `"23-00"`.
    pub fn period(&self) -> String {
        period_label(self.timestamp.hour())
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// One-hour bucket label for an hour in `0..=23`.
///
/// Hour 23 wraps to `"23-00"` rather than `"23-24"`.
pub fn period_label(hour: u32) -> String {
    if hour < 23 {
        format!("{hour}-{}", hour + 1)
    } else {
        "23-00".to_string()
    }
}

/// All 24 period labels in canonical order, `"0-1"` through `"23-00"`.
pub fn all_periods() -> Vec<String> {
    (0..24).map(period_label).collect()
}

/// Canonical day-of-week order for activity grids, Monday first.
pub const DAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar month order, January first.
pub const MONTH_ORDER: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_ORDER[(month as usize).saturating_sub(1).min(11)]
}

/// Full English day name for a chrono weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Ordered, immutable collection of parsed records.
///
/// Built once per transcript upload; the analysis layer only reads,
/// filters, and groups it. Iteration order is input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    /// Wraps an already-ordered vector of records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Read-only view of the underlying records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sorted, deduplicated list of non-notification author names.
    ///
    /// This is the list a selector UI offers; the notification sentinel is
    /// excluded.
    pub fn users(&self) -> Vec<String> {
        let mut users: Vec<String> = self
            .records
            .iter()
            .filter(|r| !r.author.is_system())
            .map(|r| r.author.name().to_string())
            .collect();
        users.sort();
        users.dedup();
        users
    }
}

impl std::ops::Index<usize> for RecordCollection {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_author_name_and_display() {
        let alice = Author::user("  Alice ");
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.to_string(), "Alice");
        assert_eq!(Author::System.name(), GROUP_NOTIFICATION);
        assert!(Author::System.is_system());
        assert!(!alice.is_system());
    }

    #[test]
    fn test_derived_fields() {
        let rec = Record::new(ts(2023, 1, 1, 10, 5), Author::user("Alice"), "Hello");
        assert_eq!(rec.year(), 2023);
        assert_eq!(rec.month_num(), 1);
        assert_eq!(rec.month_name(), "January");
        assert_eq!(rec.day(), 1);
        assert_eq!(rec.day_name(), "Sunday");
        assert_eq!(rec.hour(), 10);
        assert_eq!(rec.minute(), 5);
        assert_eq!(rec.date(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn test_period_bucketing() {
        assert_eq!(period_label(0), "0-1");
        assert_eq!(period_label(10), "10-11");
        assert_eq!(period_label(22), "22-23");
        assert_eq!(period_label(23), "23-00");
        for h in 0..23 {
            assert_eq!(period_label(h), format!("{h}-{}", h + 1));
        }
    }

    #[test]
    fn test_all_periods_canonical() {
        let periods = all_periods();
        assert_eq!(periods.len(), 24);
        assert_eq!(periods[0], "0-1");
        assert_eq!(periods[23], "23-00");
    }

    #[test]
    fn test_record_period_wraps_at_23() {
        let rec = Record::new(ts(2023, 6, 15, 23, 59), Author::System, "late");
        assert_eq!(rec.period(), "23-00");
    }

    #[test]
    fn test_users_sorted_and_deduped() {
        let records = vec![
            Record::new(ts(2023, 1, 1, 9, 0), Author::user("Bob"), "hi"),
            Record::new(ts(2023, 1, 1, 9, 1), Author::System, "Bob joined"),
            Record::new(ts(2023, 1, 1, 9, 2), Author::user("Alice"), "hey"),
            Record::new(ts(2023, 1, 1, 9, 3), Author::user("Bob"), "hey again"),
        ];
        let collection = RecordCollection::new(records);
        assert_eq!(collection.users(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_collection_order_preserved() {
        let records = vec![
            Record::new(ts(2023, 1, 1, 9, 0), Author::user("A"), "first"),
            Record::new(ts(2023, 1, 1, 9, 0), Author::user("B"), "second"),
        ];
        let collection = RecordCollection::new(records);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection[0].body, "first");
        assert_eq!(collection[1].body, "second");
    }

    #[test]
    fn test_serialization_round_trip() {
        let rec = Record::new(ts(2023, 3, 14, 21, 5), Author::user("Alice"), "pi day");
        let json = serde_json::to_string(&rec).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, parsed);
    }
}
