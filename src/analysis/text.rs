//! Text-frequency analytics: common words, word-cloud corpus, emoji.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Analyzer, LabelCount, MEDIA_PLACEHOLDER, UserFilter};
use crate::record::Record;
use crate::analysis::stats::count_in_encounter_order;

lazy_static! {
    static ref URL_RE: Regex = Regex::new(r"(?i)http\S+|www\S+").unwrap();
    static ref NON_WORD_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref DIGITS_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// Shortest token length kept by the cleaning pipeline.
const MIN_WORD_LEN: usize = 3;

/// How many rows `common_words` returns.
const TOP_WORDS: usize = 20;

/// Cleaned corpus handed to an external word-cloud renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudInput {
    /// All surviving tokens joined with single spaces; word frequency in
    /// this blob is the rendering weight.
    pub text: String,
    /// The active stop-word set, sorted, for the renderer's own filtering.
    pub stopwords: Vec<String>,
}

/// One row of the emoji frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    /// The emoji character.
    pub emoji: char,
    /// Occurrences across all scanned bodies.
    pub count: usize,
}

/// Records that participate in text analysis: authored, non-media,
/// non-empty.
fn is_text_record(record: &Record) -> bool {
    !record.author.is_system()
        && !record.body.contains(MEDIA_PLACEHOLDER)
        && !record.body.trim().is_empty()
}

impl Analyzer {
    /// Cleans one body into analysis tokens: links out, punctuation and
    /// digits out, lowercased, stop-words and short tokens dropped.
    fn clean_tokens(&self, body: &str) -> Vec<String> {
        let no_links = URL_RE.replace_all(body, "");
        let no_punct = NON_WORD_RE.replace_all(&no_links, "");
        let cleaned = DIGITS_RE.replace_all(&no_punct, "").to_lowercase();

        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() >= MIN_WORD_LEN)
            .filter(|word| !self.stopwords().contains(word))
            .map(str::to_string)
            .collect()
    }

    /// Top-20 words after cleaning, descending by count, ties keeping
    /// first-encounter order. Empty when nothing survives cleaning.
    pub fn common_words(&self, filter: &UserFilter) -> Vec<LabelCount> {
        let words = self
            .filtered(filter)
            .filter(|r| is_text_record(r))
            .flat_map(|r| self.clean_tokens(&r.body));

        count_in_encounter_order(words)
            .into_iter()
            .take(TOP_WORDS)
            .map(|(word, count)| LabelCount::new(word, count))
            .collect()
    }

    /// The cleaned corpus for a word-cloud renderer, or `None` when the
    /// selection cleans down to nothing — a soft degradation, not an error.
    pub fn word_cloud_input(&self, filter: &UserFilter) -> Option<WordCloudInput> {
        let tokens: Vec<String> = self
            .filtered(filter)
            .filter(|r| is_text_record(r))
            .flat_map(|r| self.clean_tokens(&r.body))
            .collect();

        if tokens.is_empty() {
            return None;
        }

        Some(WordCloudInput {
            text: tokens.join(" "),
            stopwords: self.stopwords().sorted_words(),
        })
    }

    /// Emoji frequency across every character of every body in the
    /// selection (notifications included), descending by count, ties
    /// keeping first-encounter order.
    pub fn emoji_frequency(&self, filter: &UserFilter) -> Vec<EmojiCount> {
        let emoji = self
            .filtered(filter)
            .flat_map(|r| r.body.chars())
            .filter(|c| self.emoji_classifier().is_emoji(*c))
            .map(|c| c.to_string());

        count_in_encounter_order(emoji)
            .into_iter()
            .map(|(s, count)| EmojiCount {
                emoji: s.chars().next().expect("one-char key"),
                count,
            })
            .collect()
    }
}
