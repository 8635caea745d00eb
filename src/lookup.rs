//! External lookup collaborators for the analysis layer.
//!
//! Link detection, emoji classification, and the stop-word list are
//! capability-bearing dependencies injected into the
//! [`Analyzer`](crate::analysis::Analyzer) at construction time, each with
//! a documented default. Tests substitute fakes through the analyzer's
//! builder methods instead of patching globals.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINK_RE: Regex = Regex::new(r"(?i)\bhttps?://\S+|\bwww\.\S+").unwrap();

    /// Emoji alphabet: anything with the Unicode `Emoji` property except
    /// ASCII (which would otherwise pull in digits, `#` and `*`).
    static ref EMOJI_RE: Regex = Regex::new(r"[\p{Emoji}--\p{ascii}]").unwrap();
}

/// Recognizes link spans inside message text.
///
/// The analysis layer only counts the spans; extraction or validation is
/// out of scope.
pub trait LinkDetector: Send + Sync {
    /// Returns the spans of `text` recognized as links, in order.
    fn find_links<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Default pattern-based link detector (`http://`, `https://`, `www.`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexLinkDetector;

impl LinkDetector for RegexLinkDetector {
    fn find_links<'a>(&self, text: &'a str) -> Vec<&'a str> {
        LINK_RE.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Membership test over a fixed emoji alphabet.
pub trait EmojiClassifier: Send + Sync {
    /// Returns `true` if the character belongs to the emoji alphabet.
    fn is_emoji(&self, c: char) -> bool;
}

/// Default classifier backed by the Unicode `Emoji` property.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiClassifier;

impl EmojiClassifier for UnicodeEmojiClassifier {
    fn is_emoji(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        EMOJI_RE.is_match(c.encode_utf8(&mut buf))
    }
}

/// Bundled stop-word file name, relative to the working directory.
pub const DEFAULT_STOPWORD_FILE: &str = "stopwords.txt";

/// Minimal built-in stop-word set, used when no file is available.
const BUILTIN_STOPWORDS: [&str; 10] = ["the", "and", "to", "of", "i", "a", "you", "is", "in", "it"];

/// Where a [`Stopwords`] set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordOrigin {
    /// Loaded from the given file.
    File(PathBuf),
    /// The built-in minimal fallback set.
    Builtin,
}

/// A stop-word set with soft-failing file loading.
///
/// A missing or unreadable file is not an error: the built-in minimal set
/// takes over and [`Stopwords::origin`] records the degradation so callers
/// can report it.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
    origin: StopwordOrigin,
}

impl Stopwords {
    /// Loads stop-words from a file, one word per line.
    ///
    /// Falls back to [`Stopwords::builtin`] when the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self {
                words: text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
                origin: StopwordOrigin::File(path.to_path_buf()),
            },
            Err(_) => Self::builtin(),
        }
    }

    /// Loads from [`DEFAULT_STOPWORD_FILE`], with the usual fallback.
    pub fn load_default() -> Self {
        Self::load(DEFAULT_STOPWORD_FILE)
    }

    /// The built-in minimal set.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            origin: StopwordOrigin::Builtin,
        }
    }

    /// Builds a set from explicit words (useful in tests).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            origin: StopwordOrigin::Builtin,
        }
    }

    /// Membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Where this set came from.
    pub fn origin(&self) -> &StopwordOrigin {
        &self.origin
    }

    /// Returns `true` if the file load fell back to the built-in set.
    pub fn is_fallback(&self) -> bool {
        self.origin == StopwordOrigin::Builtin
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, sorted, for handing to an external renderer.
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::builtin()
    }
}
