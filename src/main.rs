//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::analysis::{Analyzer, Report, UserFilter};
use chatlens::cli::Args;
use chatlens::lookup::Stopwords;
use chatlens::{ChatlensError, parse_file};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        eprintln!("   Please provide a valid exported chat transcript.");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = Args::parse();

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if let Some(ref user) = args.user {
        println!("👤 User:    {}", user);
    }

    println!();
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let records = parse_file(&args.input)?;
    println!(
        "   Found {} records from {} users ({:.2}s)",
        records.len(),
        records.users().len(),
        parse_start.elapsed().as_secs_f64()
    );

    let stopwords = Stopwords::load(&args.stopwords);
    if stopwords.is_fallback() {
        eprintln!(
            "⚠️  Stop-word file '{}' not readable; using the built-in minimal set",
            args.stopwords
        );
    }

    let analyzer = Analyzer::new(records).with_stopwords(stopwords);
    let filter = UserFilter::from(args.user.clone());

    println!("📊 Analyzing ({})...", filter);
    let report = analyzer.report(&filter);

    if let Some(ref path) = args.json {
        let json = report.to_json().expect("report serialization cannot fail");
        fs::write(path, json)?;
        println!();
        println!("✅ Done! Report saved to {}", path);
    } else {
        print_report(&report, args.rows);
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn print_report(report: &Report, rows: usize) {
    println!();
    println!("## Top Statistics");
    println!("   Messages:     {}", report.stats.messages);
    println!("   Words:        {}", report.stats.words);
    println!("   Media shared: {}", report.stats.media_messages);
    println!("   Links shared: {}", report.stats.links);

    if let Some(ref busy) = report.busy_users {
        println!();
        println!("## Most Active Users");
        for entry in &busy.top {
            println!("   {:<24} {}", entry.label, entry.count);
        }
        println!();
        println!("   Share of all messages:");
        for share in busy.shares.iter().take(rows) {
            println!("   {:<24} {:>6.2}%", share.name, share.percent);
        }
    }

    println!();
    println!("## Monthly Timeline");
    for month in &report.monthly_timeline {
        println!("   {:<16} {}", month.label, month.messages);
    }

    println!();
    println!("## Most Active Days");
    for day in &report.week_activity {
        println!("   {:<12} {}", day.label, day.count);
    }

    println!();
    println!("## Most Active Months");
    for month in &report.month_activity {
        println!("   {:<12} {}", month.label, month.count);
    }

    println!();
    println!("## Weekly Activity Heatmap (rows: days, columns: hours 0-23)");
    for (day, row) in report.heatmap.days.iter().zip(&report.heatmap.grid) {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>3}")).collect();
        println!("   {:<10} {}", day, cells.join(" "));
    }

    println!();
    println!("## Common Words");
    if report.common_words.is_empty() {
        println!("   (no words survive cleaning)");
    }
    for word in report.common_words.iter().take(rows) {
        println!("   {:<20} {}", word.label, word.count);
    }

    println!();
    println!("## Emoji");
    if report.emoji.is_empty() {
        println!("   (no emoji found)");
    }
    for emoji in report.emoji.iter().take(rows) {
        println!("   {:<4} {}", emoji.emoji, emoji.count);
    }
}
