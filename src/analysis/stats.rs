//! Scalar statistics and the most-active-user ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Analyzer, LabelCount, MEDIA_PLACEHOLDER, UserFilter};

/// Top-line counters for one filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatStats {
    /// Total records (messages and notifications alike).
    pub messages: usize,
    /// Total whitespace-separated words across all bodies.
    pub words: usize,
    /// Records whose body is exactly the media-omitted placeholder.
    pub media_messages: usize,
    /// Link spans detected across all bodies.
    pub links: usize,
}

/// One row of the author share table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    /// Author name (the notification sentinel counts as an author here).
    pub name: String,
    /// Share of total records, as a percentage rounded to 2 decimals.
    pub percent: f64,
}

/// Most-active-user ranking plus the full share table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// Top-5 authors by record count, descending; ties keep transcript
    /// encounter order.
    pub top: Vec<LabelCount>,
    /// Every author's share of total records, descending by count.
    pub shares: Vec<UserShare>,
}

/// Counts occurrences per key, remembering first-encounter order.
///
/// A stable descending sort over the result keeps encounter order within
/// equal counts, which is the tie-break rule every frequency table uses.
pub(crate) fn count_in_encounter_order<I, S>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for key in keys {
        let key = key.as_ref();
        match counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                order.push(key.to_string());
                counts.insert(key.to_string(), 1);
            }
        }
    }

    let mut table: Vec<(String, usize)> = order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

impl Analyzer {
    /// Computes the top-line counters for the given filter.
    ///
    /// Word counting splits every body on whitespace; media placeholders
    /// and notifications contribute their words like any other body, as
    /// the counters describe raw volume rather than cleaned text.
    pub fn fetch_stats(&self, filter: &UserFilter) -> ChatStats {
        let mut stats = ChatStats::default();

        for record in self.filtered(filter) {
            stats.messages += 1;
            stats.words += record.body.split_whitespace().count();
            if record.body == MEDIA_PLACEHOLDER {
                stats.media_messages += 1;
            }
            stats.links += self.link_detector().find_links(&record.body).len();
        }

        stats
    }

    /// Ranks authors by record count over the whole transcript.
    ///
    /// Always computed over all authors regardless of any filter — the
    /// ranking is only meaningful for the full conversation. The share
    /// table covers every author, notifications included, with percentages
    /// rounded to 2 decimal places.
    pub fn most_busy_users(&self) -> BusyUsers {
        let table = count_in_encounter_order(
            self.records().iter().map(|r| r.author.name()),
        );
        let total = self.records().len();
        if total == 0 {
            return BusyUsers {
                top: Vec::new(),
                shares: Vec::new(),
            };
        }

        let top = table
            .iter()
            .take(5)
            .map(|(name, count)| LabelCount::new(name.clone(), *count))
            .collect();

        let shares = table
            .into_iter()
            .map(|(name, count)| UserShare {
                name,
                percent: round2(count as f64 / total as f64 * 100.0),
            })
            .collect();

        BusyUsers { top, shares }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
