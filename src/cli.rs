//! Command-line interface definition using clap.

use clap::Parser;

use crate::lookup::DEFAULT_STOPWORD_FILE;

/// Analyze an exported chat transcript: message statistics, activity
/// timelines, word and emoji frequencies.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat_export.txt
    chatlens chat_export.txt --user Alice
    chatlens chat_export.txt --json report.json
    chatlens chat_export.txt --stopwords my_words.txt")]
pub struct Args {
    /// Path to the exported transcript file
    pub input: String,

    /// Analyze messages from one user only (default: everyone)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Stop-word list, one word per line
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STOPWORD_FILE)]
    pub stopwords: String,

    /// Write the full report as JSON to this path instead of printing tables
    #[arg(short, long, value_name = "PATH")]
    pub json: Option<String>,

    /// Rows to print per frequency table
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub rows: usize,
}
