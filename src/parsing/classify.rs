//! Message chunk classification.
//!
//! Decides whether a chunk is an authored message (`author: body`) or a
//! system notification, and extracts the parts. The grammar is ungrammatical
//! by nature: a body may itself contain `text: more text`, so the first
//! `name: ` occurrence always wins — a single bounded split from the left,
//! no backtracking. Pathological bodies can misclassify; that is the
//! accepted policy.

use lazy_static::lazy_static;
use regex::Regex;

use crate::record::Author;

lazy_static! {
    /// Author prefix: one or more non-colon characters, a colon, then
    /// whitespace. `[^:]` and `\s` both cross newlines, matching the
    /// chunk-level (not line-level) split this grammar needs.
    static ref AUTHOR_RE: Regex = Regex::new(r"([^:]+):\s").unwrap();
}

/// Splits one message chunk into author and body.
///
/// When the chunk contains a `name: ` boundary, the matched name becomes
/// the author and everything after the boundary becomes the body (any text
/// before the first boundary is dropped, as in a bounded left split).
/// Otherwise the chunk is a system notification: [`Author::System`] with
/// the full trimmed chunk as body.
///
/// This function is total: every input yields exactly one of the two
/// classifications.
pub fn classify_chunk(chunk: &str) -> (Author, String) {
    let trimmed = chunk.trim();

    if let Some(caps) = AUTHOR_RE.captures(trimmed) {
        let mat = caps.get(0).expect("group 0 always present");
        let author = caps.get(1).expect("author group present").as_str();
        let body = trimmed[mat.end()..].trim();
        (Author::user(author), body.to_string())
    } else {
        (Author::System, trimmed.to_string())
    }
}
